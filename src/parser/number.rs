use nom::{
    character::complete::{digit1, one_of},
    combinator::{opt, recognize},
    sequence::pair,
};

use super::result::{IResult, ParseError, Span};
use crate::model::MetricValue;

pub fn integer_literal(input: Span) -> IResult<MetricValue> {
    let (rest, m) = recognize(pair(opt(one_of("+-")), digit1))(input)?;
    match m.fragment().parse::<MetricValue>() {
        Ok(n) => Ok((rest, n)),
        Err(e) => Err(nom::Err::Failure(ParseError::new(
            format!("bad integer {}: {}", m.fragment(), e),
            m,
        ))),
    }
}
