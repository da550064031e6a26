//! Chart rendering for the sample-versus-reference comparison.
//!
//! Charts are drawn with the [`plotters`] bitmap backend into an in-memory RGB
//! buffer, encoded as PNG and handed out as a base64 data URI.

pub mod error;
pub mod fonts;
pub mod encode;
pub mod comparator;

pub use error::*;
pub use encode::*;
pub use comparator::*;
