use nom::{
    character::complete::{char, multispace0},
    combinator::cut,
    multi::separated_list0,
    sequence::{preceded, separated_pair},
};

use super::common::{maybe_lpadded, maybe_padded};
use super::number::integer_literal;
use super::result::{IResult, ParseError, Span};
use crate::error::Result;
use crate::model::MetricValue;

/// Parses a dictionary literal such as `{'img1.jpg': 12, "img2.jpg": 7}`.
///
/// Keys may use single or double quotes, values are integers, a trailing
/// comma is allowed. Entries are returned in source order; duplicate keys
/// are left for the caller to reject.
pub fn parse_dict(input: &str) -> Result<Vec<(String, MetricValue)>> {
    let (rest, entries) = dict_literal(Span::new(input)).map_err(ParseError::from)?;

    let (rest, _) = multispace0::<_, ParseError>(rest).map_err(ParseError::from)?;
    if !rest.fragment().is_empty() {
        return Err(ParseError::new("unexpected characters after dictionary", rest).into());
    }

    Ok(entries)
}

fn dict_literal(input: Span) -> IResult<Vec<(String, MetricValue)>> {
    // |  '{' entry_list '}'
    // |  '{' entry_list ',' '}'
    // |  '{' '}'

    let (rest, _) = maybe_lpadded(char('{'))(input)?;

    let (rest, entries) = separated_list0(char(','), maybe_padded(entry))(rest)?;

    // Chop off a possible trailing comma, but only if the entry list is not empty.
    let rest = match entries.len() {
        0 => rest,
        _ => maybe_lpadded(char(','))(rest).map_or(rest, |(r, _)| r),
    };

    match maybe_lpadded(char('}'))(rest) {
        Ok((r, _)) => Ok((r, entries)),
        Err(_) => Err(nom::Err::Failure(ParseError::new(
            "expected ',' or '}' in dictionary",
            rest,
        ))),
    }
}

fn entry(input: Span) -> IResult<(String, MetricValue)> {
    separated_pair(
        super::string::string_literal,
        maybe_padded(char(':')),
        cut(integer_value),
    )(input)
}

fn integer_value(input: Span) -> IResult<MetricValue> {
    match preceded(multispace0, integer_literal)(input) {
        Err(nom::Err::Error(_)) => Err(nom::Err::Error(ParseError::new(
            "expected integer value",
            input,
        ))),
        res => res,
    }
}
