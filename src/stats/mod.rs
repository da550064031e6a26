pub mod sample;
pub mod density;
pub mod histogram;

pub use sample::*;
pub use density::*;
pub use histogram::*;
