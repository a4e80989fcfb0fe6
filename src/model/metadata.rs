//! Document-level metadata carried alongside the dependency graph.

use serde::{Deserialize, Serialize};

/// SBOM format type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SbomFormat {
    CycloneDx,
    Spdx,
}

impl SbomFormat {
    /// Human-readable format name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CycloneDx => "CycloneDX",
            Self::Spdx => "SPDX",
        }
    }
}

impl std::fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// SBOM format type
    pub format: SbomFormat,
    /// Specification version (`specVersion` or `spdxVersion`)
    pub spec_version: Option<String>,
    /// Name of the described software or of the SPDX document
    pub name: Option<String>,
}

impl DocumentInfo {
    /// Create metadata for the given format with no optional fields set
    #[must_use]
    pub const fn new(format: SbomFormat) -> Self {
        Self {
            format,
            spec_version: None,
            name: None,
        }
    }
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self::new(SbomFormat::CycloneDx)
    }
}
