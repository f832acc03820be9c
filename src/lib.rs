// Expose the same modules from the library crate so integration tests can
// drive the session controller without going through the binary.
pub mod cli;
pub mod core;
pub mod shell;
