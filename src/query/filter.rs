use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_until},
    character::complete::{multispace0, one_of},
    combinator::{map, not, rest},
    sequence::delimited,
    IResult,
};
use std::str::FromStr;

use super::op::Op;
use crate::error::TallyDBError;

/// A single-column condition such as `Hours > 15` or `Title = 'Jak 2'`.
#[derive(Debug, PartialEq, Clone)]
pub struct Filter {
    pub header: String,
    pub op: Op,
    pub value: String,
}

impl Filter {
    pub fn new(header: &str, op: Op, value: &str) -> Self {
        Filter {
            header: header.to_string(),
            op,
            value: value.to_string(),
        }
    }

    pub fn parse(input: &str) -> IResult<&str, Filter> {
        let (input, header) = take_till1(|c: char| matches!(c, '=' | '!' | '<' | '>'))(input)?;
        let (input, op) = Op::parse(input)?;
        let (input, _) = not(one_of("=!<>"))(input)?;
        let (input, _) = multispace0(input)?;
        let (input, value) = alt((
            delimited(tag("'"), take_until("'"), tag("'")),
            map(rest, str::trim_end),
        ))(input)?;
        let (input, _) = multispace0(input)?;

        Ok((input, Filter::new(header.trim(), op, value)))
    }
}

impl FromStr for Filter {
    type Err = TallyDBError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Filter::parse(s.trim_start()) {
            Ok(("", filter)) if !filter.header.is_empty() => Ok(filter),
            Ok((remaining, _)) if !remaining.is_empty() => Err(TallyDBError::InvalidFilter(
                format!("unexpected input after filter: {}", remaining),
            )),
            Ok(_) => Err(TallyDBError::InvalidFilter(format!(
                "missing header name in '{}'",
                s
            ))),
            Err(e) => Err(TallyDBError::InvalidFilter(format!(
                "failed to parse '{}': {}",
                s, e
            ))),
        }
    }
}
