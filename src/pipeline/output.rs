//! Output handling for rendered trees.

use crate::error::{Result, SbomTreeError};
use std::io::Write;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }
}

/// Write output to the target (stdout or file).
///
/// Content is written as-is; renderers terminate their own output.
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| SbomTreeError::io(path, e))?;
            tracing::info!("Output written to {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);

        let path = PathBuf::from("/tmp/test.dot");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("tree.txt");

        write_output("a\n`-- b\n", &OutputTarget::File(path.clone())).expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "a\n`-- b\n");
    }

    #[test]
    fn test_write_output_missing_directory() {
        let target = OutputTarget::File(PathBuf::from("/definitely/not/here/tree.txt"));
        let err = write_output("x", &target).expect_err("missing directory");
        assert!(matches!(err, SbomTreeError::Io { path: Some(_), .. }));
    }
}
