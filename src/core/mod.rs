//! Core module tree for the Matbench session and its math backend.

pub mod error;
pub mod format;
pub mod linalg;
pub mod matgen;
pub mod session;
