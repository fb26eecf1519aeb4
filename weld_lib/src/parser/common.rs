use nom::{
    bytes::complete::{take_while, take_while1},
    IResult,
};

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;
pub type ErrType<'a> = nom::error::VerboseError<Span<'a>>;
pub type MyResult<'a, O> = IResult<Span<'a>, O, ErrType<'a>>;

/// Helper function to convert a span to a string
pub fn span_string(span: &Span) -> String {
    String::from(*span.fragment())
}

/// Combinator that matches zero or more spaces EXCLUDING newlines
pub fn sp0(input: Span) -> MyResult<Span> {
    let chars = " \t";
    take_while(move |c| chars.contains(c))(input)
}

/// Matches an uppercase constant name (`[A-Z_]+`)
pub fn const_name(input: Span) -> MyResult<Span> {
    take_while1(|c: char| c.is_ascii_uppercase() || c == '_')(input)
}

/// Matches an identifier-safe constant value (`[A-Za-z0-9_]+`)
pub fn const_value(input: Span) -> MyResult<Span> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}
