//! Validation of a comparison request and the parse → compute → render
//! pipeline shared by the HTTP handlers and the `plot` command.

pub mod submission;
pub mod pipeline;

pub use submission::*;
pub use pipeline::*;
