#![forbid(unsafe_code)]
#![warn(clippy::all)]
//! This crate is a strict Json parser: it scans the input once, left to
//! right, builds a dynamic [`value::Value`] tree and rejects anything the
//! Json grammar does not allow — trailing commas, unquoted keys,
//! unterminated literals, leftover content — with an error that tells you
//! what went wrong and where.
//!
//! ## Why use it ?
//!
//! Two things set it apart from the usual dynamic value parsers:
//!
//! - Numbers keep their natural type. An integer literal becomes an `i32`,
//!   grows into an `i64` when it has to, and only falls back to an `f64`
//!   when even that overflows. A literal with a fraction or an exponent is
//!   always an `f64`. Your code can tell the three apart.
//! - Every error carries its position (character offset, line and column),
//!   so a user can be pointed at the exact spot a document broke.
//!
//! ## How to use it ?
//!
//! ### Parsing
//!
//! ```rust
//! use strict_json_parser::parse;
//! use strict_json_parser::value::{Number, Value};
//!
//! let parsed = parse(r#"{"id": 7, "ratio": 0.5}"#).unwrap();
//!
//! let object = parsed.unwrap_object();
//!
//! assert_eq!(object["id"], Value::Number(Number::Int(7)));
//! assert_eq!(object["ratio"], Value::Number(Number::Float(0.5)));
//! ```
//!
//! ### Handling errors
//!
//! ```rust
//! use strict_json_parser::{error::Kind, parse};
//!
//! let err = parse(r#"{"id": 7,}"#).unwrap_err();
//!
//! assert_eq!(err.kind, Kind::TrailingComma);
//! assert_eq!(err.position.offset, 9);
//! ```
//!
//! ### Serializing in a struct
//!
//! The value tree implements [Serialize](https://docs.rs/serde/latest/serde/trait.Serialize.html),
//! so it can be handed to any serde consumer:
//!
//! ```rust
//! use serde::Deserialize;
//! use strict_json_parser::parse;
//!
//! #[derive(Deserialize)]
//! struct Test {
//!     pub hello: String,
//! }
//!
//! let json = r#"{"hello": "world"}"#;
//!
//! let parsed = parse(json).unwrap();
//!
//! let test: Test = serde_json::from_value(serde_json::to_value(parsed).unwrap()).unwrap();
//!
//! assert_eq!(test.hello, "world");
//! ```

extern crate bytecount;
extern crate memchr;
extern crate nom;
extern crate serde;

mod input;
mod parser;
mod ser;

pub mod error;
pub mod value;

pub use parser::parse;
