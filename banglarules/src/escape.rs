use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{anychar, char},
    combinator::{map, map_res},
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};

use crate::RulesError;

enum Piece {
    Literal(char),
    Escape(u32),
}

/// Decode `\uXXXX` and `\u{X..}` escapes in a rule-file cell.
///
/// Anything that does not look like an escape is copied through, so a stray
/// backslash stays a backslash. An escape naming a surrogate or an
/// out-of-range value is an error.
pub fn unescape(input: &str) -> Result<String, RulesError> {
    let (rest, pieces) =
        many0(piece)(input).map_err(|e| RulesError::Escape(format!("{input:?}: {e}")))?;
    debug_assert!(rest.is_empty());
    pieces
        .into_iter()
        .map(|p| match p {
            Piece::Literal(c) => Ok(c),
            Piece::Escape(code) => std::char::from_u32(code)
                .ok_or_else(|| RulesError::Escape(format!("U+{code:04X} is not a scalar value"))),
        })
        .collect()
}

fn piece(input: &str) -> IResult<&str, Piece> {
    alt((
        map(braced_escape, Piece::Escape),
        map(short_escape, Piece::Escape),
        map(anychar, Piece::Literal),
    ))(input)
}

fn braced_escape(input: &str) -> IResult<&str, u32> {
    map_res(
        delimited(tag("\\u{"), take_while_m_n(1, 6, is_hex), char('}')),
        |hex: &str| u32::from_str_radix(hex, 16),
    )(input)
}

fn short_escape(input: &str) -> IResult<&str, u32> {
    map_res(
        preceded(tag("\\u"), take_while_m_n(4, 4, is_hex)),
        |hex: &str| u32::from_str_radix(hex, 16),
    )(input)
}

fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_plain() {
        assert_eq!(unescape("কখগ").unwrap(), "কখগ");
        assert_eq!(unescape("").unwrap(), "");
    }

    #[test]
    fn test_unescape_short_form() {
        assert_eq!(unescape("\\u0995\\u09CD\\u09B7").unwrap(), "ক্ষ");
        // exactly four digits are consumed, trailing hex letters stay literal
        assert_eq!(unescape("\\u0995abc").unwrap(), "কabc");
    }

    #[test]
    fn test_unescape_braced_form() {
        assert_eq!(unescape("\\u{995}\\u{9BC}").unwrap(), "ক\u{09BC}");
        assert_eq!(unescape("x\\u{1F600}y").unwrap(), "x\u{1F600}y");
    }

    #[test]
    fn test_unescape_leaves_non_escapes() {
        assert_eq!(unescape("a\\b").unwrap(), "a\\b");
        assert_eq!(unescape("\\uZZZZ").unwrap(), "\\uZZZZ");
    }

    #[test]
    fn test_unescape_rejects_invalid_scalars() {
        assert!(matches!(unescape("\\uD800"), Err(RulesError::Escape(_))));
        assert!(matches!(unescape("\\u{110000}"), Err(RulesError::Escape(_))));
    }
}
