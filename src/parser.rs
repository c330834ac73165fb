use crate::error::{Error, Kind};
use crate::input::Input;
use crate::value::{Number, Value};
use nom::branch::alt;
use nom::bytes::complete::{tag, take};
use nom::character::complete::{anychar, char, digit0, multispace0, one_of};
use nom::combinator::{opt, recognize, value};
use nom::sequence::{pair, tuple};
use nom::{Err, IResult};
use std::collections::HashMap;

pub type Span<'a> = Input<'a>;

pub type Result<'a, R> = IResult<Span<'a>, R, Error>;
pub type ParseResult = std::result::Result<Value, Error>;

/// Skips whitespace, then peeks at the next character without consuming it.
/// `None` means the input is exhausted.
fn significant(i: Span) -> Result<Option<char>> {
    let (i, _) = multispace0(i)?;
    let next = i.fragment().chars().next();

    Ok((i, next))
}

fn boolean(i: Span) -> Result<bool> {
    alt((value(true, tag("true")), value(false, tag("false"))))(i)
        .map_err(|_: Err<Error>| Err::Failure(Error::at(i, Kind::NotABool)))
}

fn null(i: Span) -> Result<()> {
    value((), tag("null"))(i).map_err(|_: Err<Error>| Err::Failure(Error::at(i, Kind::NotANull)))
}

fn u16_hex(i: Span) -> Result<u16> {
    let (rest, hex) = take(4usize)(i)?;

    match u16::from_str_radix(hex.fragment(), 16) {
        Ok(unit) => Ok((rest, unit)),
        Err(_) => Err(Err::Failure(Error::at(
            i,
            Kind::NotAnHex(hex.fragment().to_string()),
        ))),
    }
}

/// Decodes the four hex digits after `\u` as one UTF-16 code unit. A high
/// surrogate followed by a low surrogate escape yields the supplementary
/// character the pair encodes; a surrogate half that does not pair has no
/// scalar value of its own and yields U+FFFD. A truncated escape at the end
/// of the input is dropped.
fn unicode_escape(i: Span) -> Result<Option<char>> {
    if i.fragment().chars().take(4).count() < 4 {
        return Ok((i, None));
    }

    let (rest, unit) = u16_hex(i)?;

    if !(0xD800..0xE000).contains(&unit) {
        return Ok((rest, std::char::from_u32(u32::from(unit))));
    }

    if (0xD800..0xDC00).contains(&unit) && rest.fragment().starts_with("\\u") {
        let (after, _) = tag("\\u")(rest)?;

        if after.fragment().chars().take(4).count() == 4 {
            let (after, low) = u16_hex(after)?;

            if (0xDC00..0xE000).contains(&low) {
                let high_ten = u32::from(unit) - 0xD800;
                let low_ten = u32::from(low) - 0xDC00;

                return Ok((after, std::char::from_u32((high_ten << 10) + low_ten + 0x10000)));
            }
        }
    }

    Ok((rest, Some(std::char::REPLACEMENT_CHARACTER)))
}

fn string(i: Span) -> Result<String> {
    let (after_quote, _) = char('"')(i)?;

    let mut out = String::new();
    let mut i = after_quote;

    loop {
        let (rest, c) =
            anychar(i).map_err(|_: Err<Error>| Err::Failure(Error::at(i, Kind::UnterminatedString)))?;

        if c == '"' {
            return Ok((rest, out));
        }

        if c != '\\' {
            out.push(c);
            i = rest;
            continue;
        }

        let (rest, escape) = anychar(rest)
            .map_err(|_: Err<Error>| Err::Failure(Error::at(rest, Kind::UnterminatedString)))?;

        i = match escape {
            '"' | '\\' | '/' => {
                out.push(escape);
                rest
            }
            'b' => {
                out.push('\u{0008}');
                rest
            }
            'f' => {
                out.push('\u{000C}');
                rest
            }
            'n' => {
                out.push('\n');
                rest
            }
            'r' => {
                out.push('\r');
                rest
            }
            't' => {
                out.push('\t');
                rest
            }
            'u' => {
                let (rest, decoded) = unicode_escape(rest)?;

                if let Some(c) = decoded {
                    out.push(c);
                }

                rest
            }
            // Unknown escapes keep the escaped character as-is
            other => {
                out.push(other);
                rest
            }
        };
    }
}

fn number(i: Span) -> Result<Number> {
    let (rest, literal) = recognize(tuple((
        opt(char('-')),
        digit0,
        opt(pair(char('.'), digit0)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit0))),
    )))(i)?;

    let text = literal.fragment();
    let is_float = text.contains('.') || text.contains('e') || text.contains('E');

    let number = (if is_float {
        text.parse().map(Number::Float).map_err(|_| ())
    } else {
        text.parse()
            .map(Number::Int)
            .or_else(|_| text.parse().map(Number::Long))
            // Integers too big for an i64 degrade to a float
            .or_else(|_| text.parse().map(Number::Float))
            .map_err(|_| ())
    })
    .map_err(|()| Err::Failure(Error::at(i, Kind::NotANumber(text.to_string()))))?;

    Ok((rest, number))
}

fn object(i: Span) -> Result<HashMap<String, Value>> {
    let mut map = HashMap::new();

    // Cursor is just past the opening brace
    let (mut i, mut next) = significant(i)?;

    loop {
        match next {
            None => return Err(Err::Failure(Error::at(i, Kind::UnterminatedObject))),
            Some('}') => {
                let (rest, _) = anychar(i)?;
                return Ok((rest, map));
            }
            Some('"') => {}
            Some(_) => return Err(Err::Failure(Error::at(i, Kind::MissingKeyQuote))),
        }

        let (rest, key) = string(i)?;

        let (rest, colon) = significant(rest)?;
        if colon != Some(':') {
            return Err(Err::Failure(Error::at(rest, Kind::MissingColon)));
        }
        let (rest, _) = anychar(rest)?;

        let (rest, member) = json_value(rest)?;
        map.insert(key, member);

        let (rest, separator) = significant(rest)?;
        match separator {
            Some(',') => {
                let (rest, _) = anychar(rest)?;

                // A comma must introduce another key, never the closing brace
                let (rest, lookahead) = significant(rest)?;
                if lookahead == Some('}') {
                    return Err(Err::Failure(Error::at(rest, Kind::TrailingComma)));
                }

                i = rest;
                next = lookahead;
            }
            Some('}') => {
                let (rest, _) = anychar(rest)?;
                return Ok((rest, map));
            }
            _ => return Err(Err::Failure(Error::at(rest, Kind::MissingCommaOrBrace))),
        }
    }
}

fn array(i: Span) -> Result<Vec<Value>> {
    let mut list = Vec::new();

    // Cursor is just past the opening bracket
    let (mut i, mut next) = significant(i)?;

    loop {
        match next {
            None => return Err(Err::Failure(Error::at(i, Kind::UnterminatedArray))),
            Some(']') => {
                let (rest, _) = anychar(i)?;
                return Ok((rest, list));
            }
            // A stray comma at element position falls through to the
            // dispatcher, which rejects it as an unexpected character
            Some(_) => {}
        }

        let (rest, element) = json_value(i)?;
        list.push(element);

        let (rest, separator) = significant(rest)?;
        match separator {
            Some(',') => {
                let (rest, _) = anychar(rest)?;

                let (rest, lookahead) = significant(rest)?;
                if lookahead == Some(']') {
                    return Err(Err::Failure(Error::at(rest, Kind::TrailingComma)));
                }

                i = rest;
                next = lookahead;
            }
            Some(']') => {
                let (rest, _) = anychar(rest)?;
                return Ok((rest, list));
            }
            _ => return Err(Err::Failure(Error::at(rest, Kind::MissingCommaOrBracket))),
        }
    }
}

/// The single recursion point: every composite parser comes back here for
/// each nested value.
fn json_value(i: Span) -> Result<Value> {
    let (i, first) = significant(i)?;

    match first {
        Some('{') => {
            let (i, _) = anychar(i)?;
            let (i, map) = object(i)?;

            Ok((i, Value::Object(map)))
        }
        Some('[') => {
            let (i, _) = anychar(i)?;
            let (i, list) = array(i)?;

            Ok((i, Value::Array(list)))
        }
        Some('"') => {
            let (i, decoded) = string(i)?;

            Ok((i, Value::String(decoded)))
        }
        Some('t') | Some('f') => {
            let (i, b) = boolean(i)?;

            Ok((i, Value::Bool(b)))
        }
        Some('n') => {
            let (i, _) = null(i)?;

            Ok((i, Value::Null))
        }
        Some(c) if c.is_ascii_digit() || c == '-' => {
            let (i, num) = number(i)?;

            Ok((i, Value::Number(num)))
        }
        first => Err(Err::Failure(Error::at(i, Kind::UnexpectedCharacter(first)))),
    }
}

fn unwrap_nom_error<T>(value: Result<T>) -> std::result::Result<(Span, T), Error> {
    match value {
        Ok(v) => Ok(v),
        Err(nom::Err::Error(e)) => Err(e),
        Err(nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => panic!("Got Incomplete error"),
    }
}

fn end_chars(i: Span) -> std::result::Result<(), Error> {
    let (rest, _) = unwrap_nom_error(multispace0(i))?;

    if rest.is_empty() {
        return Ok(());
    }

    Err(Error::at(rest, Kind::CharsAfterRoot))
}

/// Parses a complete Json document into a [`Value`] tree.
///
/// All scan state lives in the call, so `parse` can be used from several
/// threads at once.
pub fn parse(s: &str) -> ParseResult {
    let span = Span::new(s.trim());

    let (i, parsed) = unwrap_nom_error(json_value(span))?;

    end_chars(i)?;

    Ok(parsed)
}
