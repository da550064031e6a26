pub mod table;
pub mod reader;

pub use table::*;
pub use reader::*;
