use crate::input::Input;
use nom::error::{ErrorKind, ParseError};
use std::fmt::Display;

/// Where in the document an error was raised.
///
/// `offset` counts characters from the start of the trimmed input, `line` and
/// `col` are 1-based and follow the same convention as most editors.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl From<Input<'_>> for Position {
    fn from(i: Input<'_>) -> Self {
        Position {
            offset: i.location_offset(),
            line: i.location_line(),
            col: i.get_utf8_column(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Kind {
    /// A value started with a character no Json value can start with. `None`
    /// means the input ended where a value was required.
    UnexpectedCharacter(Option<char>),
    /// An object key did not start with `"`.
    MissingKeyQuote,
    MissingColon,
    MissingCommaOrBrace,
    MissingCommaOrBracket,
    /// A comma directly followed by `}` or `]`.
    TrailingComma,
    UnterminatedObject,
    UnterminatedArray,
    UnterminatedString,
    NotABool,
    NotANull,
    /// The literal matched the number grammar but none of i32, i64 or f64
    /// could represent it.
    NotANumber(String),
    /// The four characters after `\u` were not hex digits.
    NotAnHex(String),
    /// Non-whitespace input left over after the top-level value.
    CharsAfterRoot,
    /// Raised by a combinator outside the remapped paths. `parse` never
    /// surfaces this in practice.
    NomError(nom::error::ErrorKind),
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(Some(c)) => write!(f, "Unexpected character: '{}'", c),
            Self::UnexpectedCharacter(None) => write!(f, "Unexpected end of input"),
            Self::MissingKeyQuote => write!(f, "Expected '\"'"),
            Self::MissingColon => write!(f, "Expected ':'"),
            Self::MissingCommaOrBrace => write!(f, "Expected ',' or '}}'"),
            Self::MissingCommaOrBracket => write!(f, "Expected ',' or ']'"),
            Self::TrailingComma => write!(f, "Trailing comma not allowed"),
            Self::UnterminatedObject => write!(f, "Unterminated object"),
            Self::UnterminatedArray => write!(f, "Unterminated array"),
            Self::UnterminatedString => write!(f, "Unterminated string"),
            Self::NotABool => write!(f, "Invalid boolean value"),
            Self::NotANull => write!(f, "Invalid null value"),
            Self::NotANumber(literal) => write!(f, "Invalid number '{}'", literal),
            Self::NotAnHex(hex) => write!(f, "'{}' is an invalid hex number", hex),
            Self::CharsAfterRoot => write!(f, "Unexpected content after JSON"),
            Self::NomError(kind) => write!(f, "Parser error: {:?}", kind),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error {
    pub position: Position,
    pub kind: Kind,
}

impl Error {
    pub fn new(position: Position, kind: Kind) -> Self {
        Self { position, kind }
    }

    pub(crate) fn at(i: Input<'_>, kind: Kind) -> Self {
        Self::new(Position::from(i), kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at position {} (line {}, column {})",
            self.kind, self.position.offset, self.position.line, self.position.col
        )
    }
}

impl std::error::Error for Error {}

impl<'a> ParseError<Input<'a>> for Error {
    fn from_error_kind(input: Input<'a>, kind: ErrorKind) -> Self {
        Self {
            position: Position::from(input),
            kind: Kind::NomError(kind),
        }
    }

    fn append(input: Input<'a>, kind: ErrorKind, _other: Self) -> Self {
        Self {
            position: Position::from(input),
            kind: Kind::NomError(kind),
        }
    }
}
