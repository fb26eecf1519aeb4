pub(crate) mod common;
pub mod consts;
pub mod line;

pub use line::{classify_line, parse_definition, ConstDef, SourceLine};
