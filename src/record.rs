//! The record construction contract.

use std::convert::Infallible;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

/// Capability a record type must provide: build one instance from one
/// decoded line of text.
///
/// This is the sole coupling point between the decoding engine and
/// record-specific parsing logic. The engine passes each retained line
/// exactly as decoded, including leading/trailing whitespace and including
/// empty lines; interpretation (trimming, splitting, numeric parsing) is
/// entirely the implementation's responsibility. A failed build propagates
/// to the consumer untouched, attributed to the offending line.
///
/// # Example
///
/// ```
/// use linecast::FromLine;
///
/// struct Contact {
///     last: String,
///     first: String,
///     email: String,
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("expected `last, first, email`, got `{0}`")]
/// struct BadContact(String);
///
/// impl FromLine for Contact {
///     type Err = BadContact;
///
///     fn from_line(line: &str) -> Result<Self, Self::Err> {
///         let mut fields = line.split(',').map(str::trim);
///         match (fields.next(), fields.next(), fields.next()) {
///             (Some(last), Some(first), Some(email)) if !email.is_empty() => Ok(Contact {
///                 last: last.to_string(),
///                 first: first.to_string(),
///                 email: email.to_string(),
///             }),
///             _ => Err(BadContact(line.to_string())),
///         }
///     }
/// }
///
/// let contact = Contact::from_line("Smith, John, jsmith@gmail.com").unwrap();
/// assert_eq!(contact.email, "jsmith@gmail.com");
/// ```
pub trait FromLine: Sized {
    /// Error produced when a line cannot be turned into a record.
    type Err: std::error::Error + Send + Sync + 'static;

    /// Build one record from one line of text.
    fn from_line(line: &str) -> Result<Self, Self::Err>;
}

/// The identity build: the record is the raw line, whitespace and all.
impl FromLine for String {
    type Err = Infallible;

    fn from_line(line: &str) -> Result<Self, Self::Err> {
        Ok(line.to_string())
    }
}

macro_rules! from_line_via_parse {
    ($($ty:ty => $err:ty),* $(,)?) => {
        $(
            impl FromLine for $ty {
                type Err = $err;

                fn from_line(line: &str) -> Result<Self, Self::Err> {
                    line.trim().parse()
                }
            }
        )*
    };
}

// Primitive records parse the trimmed line via FromStr.
from_line_via_parse! {
    i8 => ParseIntError,
    i16 => ParseIntError,
    i32 => ParseIntError,
    i64 => ParseIntError,
    i128 => ParseIntError,
    isize => ParseIntError,
    u8 => ParseIntError,
    u16 => ParseIntError,
    u32 => ParseIntError,
    u64 => ParseIntError,
    u128 => ParseIntError,
    usize => ParseIntError,
    f32 => ParseFloatError,
    f64 => ParseFloatError,
    bool => ParseBoolError,
}
