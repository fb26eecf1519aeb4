pub const DIRECTIVE_QUOTE: char = '\'';
pub const DIRECTIVE_TERMINATOR: &str = "';";
pub const DIRECTIVE_INCLUDE: &str = "<include>";
pub const DIRECTIVE_CONSTANTS: &str = "<constants>";

pub const CONST_KEYWORD: &str = "const";
