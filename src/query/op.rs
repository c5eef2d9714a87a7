use nom::{branch::alt, bytes::complete::tag, combinator::map, IResult};
use std::str::FromStr;

use crate::error::TallyDBError;

/// Strict numeric comparison applied as `cell <op> operand`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumberOp {
    LessThan,
    GreaterThan,
}

impl NumberOp {
    pub fn parse(input: &str) -> IResult<&str, NumberOp> {
        alt((
            map(tag("<"), |_| NumberOp::LessThan),
            map(tag(">"), |_| NumberOp::GreaterThan),
        ))(input)
    }

    pub fn evaluate(&self, left: f64, right: f64) -> bool {
        match self {
            NumberOp::LessThan => left < right,
            NumberOp::GreaterThan => left > right,
        }
    }
}

impl FromStr for NumberOp {
    type Err = TallyDBError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match NumberOp::parse(s.trim()) {
            Ok(("", op)) => Ok(op),
            _ => Err(TallyDBError::InvalidFilter(format!(
                "unsupported number operator '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Op {
    Equal,
    NotEqual,
    Number(NumberOp),
}

impl Op {
    pub fn parse(input: &str) -> IResult<&str, Op> {
        alt((
            map(tag("!="), |_| Op::NotEqual),
            map(tag("="), |_| Op::Equal),
            map(NumberOp::parse, Op::Number),
        ))(input)
    }
}
