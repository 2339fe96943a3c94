#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_till, take_while, take_while1},
    character::complete::{char, one_of},
    combinator::{opt, recognize},
    sequence::delimited,
};
use thiserror::Error;

/// One `name [amount]` line of a roster.
///
/// The amount is kept as raw text; deciding whether it is a valid number is
/// left to amount normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    pub line: usize,
    pub name: &'a str,
    pub amount: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster<'a> {
    pub entries: Vec<RosterEntry<'a>>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{3000}')
}

fn sp(input: &str) -> IResult<&str, &str> {
    take_while(is_blank).parse(input)
}

fn gap(input: &str) -> IResult<&str, &str> {
    take_while1(is_blank).parse(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize((char('#'), take_till(|c| c == '\n'))).parse(input)
}

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '#' | '"' | ':' | ',' | '=')
}

fn quoted_name(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"')).parse(input)
}

fn bare_name(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char).parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    alt((quoted_name, bare_name)).parse(input)
}

fn separator(input: &str) -> IResult<&str, &str> {
    alt((recognize((sp, one_of(":,="), sp)), gap)).parse(input)
}

fn amount(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '#').parse(input)
}

// name [separator amount]
fn entry(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    (name, opt((separator, amount).map(|(_, amount)| amount))).parse(input)
}

fn trailing(input: &str) -> IResult<&str, &str> {
    recognize((sp, opt(comment))).parse(input)
}

/// Parses a roster, one participant per line.
///
/// Blank lines and `#` comments are skipped. Names are bare tokens or
/// double-quoted strings; the amount may be omitted.
pub fn parse_roster(input: &str) -> Result<Roster<'_>, ParseError> {
    let mut entries = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let content = line.trim_start_matches(is_blank);
        if content.trim().is_empty() || content.starts_with('#') {
            continue;
        }

        let (rest, (name, amount)) = (sp, entry, trailing)
            .map(|(_, entry, _)| entry)
            .parse(line)
            .map_err(|e| ParseError::SyntaxError {
                line: line_no,
                detail: i18n::syntax_error_detail(e),
            })?;
        if !rest.trim().is_empty() {
            return Err(ParseError::SyntaxError {
                line: line_no,
                detail: i18n::syntax_error_unparsed_detail(rest.trim()),
            });
        }

        entries.push(RosterEntry {
            line: line_no,
            name,
            amount,
        });
    }

    Ok(Roster { entries })
}
