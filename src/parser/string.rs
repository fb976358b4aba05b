use nom::{branch::alt, character::complete::char, InputTake};

use super::result::{IResult, ParseError, Span};

/// Single- or double-quoted label.
///
/// Understands the escapes Python uses when printing a string: `\\`, `\'`,
/// `\"`, `\n`, `\r`, `\t` and `\xNN`.
pub fn string_literal(input: Span) -> IResult<String> {
    alt((quoted('\''), quoted('"')))(input)
}

fn quoted(quote: char) -> impl Fn(Span) -> IResult<String> {
    move |input: Span| {
        let (body, _) = char::<_, ParseError>(quote)(input)?;

        let unterminated =
            || nom::Err::Failure(ParseError::new("unterminated string literal", input));

        let mut value = String::new();
        let mut chars = body.fragment().char_indices();
        let end = loop {
            let (i, c) = chars.next().ok_or_else(unterminated)?;
            if c == quote {
                break i + c.len_utf8();
            }
            if c != '\\' {
                value.push(c);
                continue;
            }

            let (_, e) = chars.next().ok_or_else(unterminated)?;
            match e {
                '\\' | '\'' | '"' => value.push(e),
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'x' => {
                    let hex: String = chars.by_ref().take(2).map(|(_, h)| h).collect();
                    let code = Some(&hex)
                        .filter(|h| h.len() == 2 && h.chars().all(|h| h.is_ascii_hexdigit()))
                        .and_then(|h| u32::from_str_radix(h, 16).ok())
                        .and_then(std::char::from_u32);
                    match code {
                        Some(c) => value.push(c),
                        None => {
                            return Err(nom::Err::Failure(ParseError::new(
                                "invalid \\x escape in string literal",
                                input,
                            )))
                        }
                    }
                }
                _ => {
                    return Err(nom::Err::Failure(ParseError::new(
                        format!("unknown escape '\\{}' in string literal", e),
                        input,
                    )))
                }
            }
        };

        let (rest, _) = body.take_split(end);
        Ok((rest, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_string_literal() -> std::result::Result<(), nom::Err<ParseError<'static>>> {
        #[rustfmt::skip]
        let tests = [
            ("'img1.jpg'", "img1.jpg"),
            ("\"img1.jpg\"", "img1.jpg"),
            ("''", ""),
            ("'with \"double\" quotes'", "with \"double\" quotes"),
            ("'snow ❄ man'", "snow ❄ man"),
            (r"'it\'s'", "it's"),
            (r#"'it\'s "x"'"#, "it's \"x\""),
            (r"'C:\\img'", "C:\\img"),
            (r"'a\nb\tc\x07'", "a\nb\tc\u{7}"),
        ];

        for &(input, expected) in &tests {
            let (rest, actual) = string_literal(Span::new(input))?;
            assert_eq!(expected, actual, "while parsing {}", input);
            assert_eq!("", *rest.fragment());
        }
        Ok(())
    }

    #[test]
    fn test_literal_stops_at_closing_quote() -> std::result::Result<(), nom::Err<ParseError<'static>>> {
        let (rest, actual) = string_literal(Span::new(r"'a\'b': 1"))?;
        assert_eq!("a'b", actual);
        assert_eq!(": 1", *rest.fragment());
        assert_eq!(6, rest.location_offset());
        Ok(())
    }

    #[test]
    fn test_invalid_string_literal() {
        for &input in &[
            "img1",
            "'unterminated",
            "\"mixed'",
            r"'dangling\",
            r"'bad \q escape'",
            r"'bad \x4 hex'",
            r"'bad \x+1 hex'",
        ] {
            assert!(
                string_literal(Span::new(input)).is_err(),
                "expected error while parsing {}",
                input
            );
        }
    }
}
