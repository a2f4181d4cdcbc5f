//! Input parsing and raw table representation.

mod parser;
mod table;

pub use parser::{Parser, ParserConfig};
pub use table::{DataTable, SourceMetadata};
