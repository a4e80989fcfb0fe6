//! Canonical graph model for normalized SBOMs.
//!
//! Both `CycloneDX` and SPDX documents are reduced to a [`Graph`]: a set of
//! labeled nodes, a set of directed "depends on" edges and the candidate
//! roots inferred while normalizing. Once a parser returns a `Graph` nothing
//! mutates it again; the forest builder and the renderers only read it.

mod graph;
mod metadata;

pub use graph::*;
pub use metadata::*;
