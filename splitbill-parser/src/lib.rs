#![warn(clippy::uninlined_format_args)]

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseCommand<'a> {
    pub payer: &'a str,
    /// Digits as written, e.g. `12.50`.
    pub amount: &'a str,
    pub description: &'a str,
    pub split_among: Option<Vec<&'a str>>,
    /// Raw text after `on`; not validated here.
    pub date: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    AddExpense(ExpenseCommand<'a>),
    Balance,
    Summary,
    Help,
    Clear,
    Unknown,
}

const BALANCE_KEYWORDS: &[&str] = &["balance", "who owes", "owes who"];
const SUMMARY_KEYWORDS: &[&str] = &["summary", "list expenses"];
const HELP_KEYWORDS: &[&str] = &["help"];
const CLEAR_KEYWORDS: &[&str] = &["clear", "reset"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Clauses<'a> {
    split_among: Option<&'a str>,
    date: Option<&'a str>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn sp(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

fn amount_literal(input: &str) -> IResult<&str, &str> {
    recognize((digit1, opt((char('.'), digit1)))).parse(input)
}

fn split_keyword(input: &str) -> IResult<&str, &str> {
    (
        sp,
        tag_no_case("split"),
        sp,
        alt((
            tag_no_case("between"),
            tag_no_case("among"),
            tag_no_case("with"),
        )),
        sp,
    )
        .map(|(_, _, _, keyword, _)| keyword)
        .parse(input)
}

fn on_keyword(input: &str) -> IResult<&str, &str> {
    (sp, tag_no_case("on"), sp)
        .map(|(_, keyword, _)| keyword)
        .parse(input)
}

// ",", ", and" or " and "
fn people_separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize((
            char(','),
            take_while(char::is_whitespace),
            opt((tag_no_case("and"), sp)),
        )),
        recognize((sp, tag_no_case("and"), sp)),
    ))
    .parse(input)
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Shortest non-empty prefix of `input` whose remainder satisfies `rest`.
/// The prefix never crosses a line break.
fn shortest_prefix<'a, T>(
    input: &'a str,
    mut rest: impl FnMut(&'a str) -> Option<T>,
) -> Option<(&'a str, T)> {
    input
        .char_indices()
        .take_while(|&(_, c)| !is_line_break(c))
        .map(|(idx, c)| idx + c.len_utf8())
        .find_map(|end| rest(&input[end..]).map(|value| (&input[..end], value)))
}

// " on <date>" running to the end of the line
fn date_clause(input: &str) -> Option<&str> {
    let (date, _) = on_keyword(input).ok()?;
    (!date.is_empty() && !date.contains(is_line_break)).then_some(date)
}

// " split between|among|with <people>" optionally followed by a date clause
fn split_clause(input: &str) -> Option<(&str, Option<&str>)> {
    let (people, _) = split_keyword(input).ok()?;
    shortest_prefix(people, |remainder| {
        if remainder.is_empty() {
            Some(None)
        } else {
            date_clause(remainder).map(Some)
        }
    })
}

fn clauses(input: &str) -> Option<Clauses<'_>> {
    if let Some((people, date)) = split_clause(input) {
        return Some(Clauses {
            split_among: Some(people),
            date,
        });
    }
    if let Some(date) = date_clause(input) {
        return Some(Clauses {
            split_among: None,
            date: Some(date),
        });
    }
    input.is_empty().then_some(Clauses::default())
}

// {payer} paid {amount} for {description} [split with {people}] [on {date}]
fn expense_at(input: &str) -> Option<ExpenseCommand<'_>> {
    let (rest, (payer, _, _, _, amount, _, _, _)) = (
        word,
        sp,
        tag_no_case("paid"),
        sp,
        amount_literal,
        sp,
        tag_no_case("for"),
        sp,
    )
        .parse(input)
        .ok()?;

    let (description, clauses) = shortest_prefix(rest, clauses)?;
    let description = description.trim();
    if description.is_empty() {
        return None;
    }

    Some(ExpenseCommand {
        payer,
        amount,
        description,
        split_among: clauses.split_among.map(split_people),
        date: clauses.date.map(str::trim),
    })
}

/// Finds an expense statement anywhere in `input`, starting at a word boundary
/// and running to the end of the line.
pub fn parse_expense(input: &str) -> Option<ExpenseCommand<'_>> {
    let input = input.trim();
    let mut prev_is_word = false;
    input.char_indices().find_map(|(idx, c)| {
        let at_word_start = is_word_char(c) && !prev_is_word;
        prev_is_word = is_word_char(c);
        if at_word_start {
            expense_at(&input[idx..])
        } else {
            None
        }
    })
}

/// Splits `A, B and C` into names. Blank entries are dropped.
pub fn split_people(list: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut piece_start = 0;
    let mut cursor = 0;

    while cursor < list.len() {
        match people_separator(&list[cursor..]) {
            Ok((rest, _)) => {
                names.push(list[piece_start..cursor].trim());
                cursor = list.len() - rest.len();
                piece_start = cursor;
            }
            Err(_) => {
                cursor += list[cursor..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    names.push(list[piece_start..].trim());

    names.retain(|name| !name.is_empty());
    names
}

/// Classifies one line. The expense grammar wins over keyword intents, which
/// are checked in order: balance, summary, help, clear.
pub fn parse_command(input: &str) -> Command<'_> {
    if let Some(expense) = parse_expense(input) {
        return Command::AddExpense(expense);
    }

    let lowered = input.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|kw| lowered.contains(kw));

    if mentions(BALANCE_KEYWORDS) {
        Command::Balance
    } else if mentions(SUMMARY_KEYWORDS) {
        Command::Summary
    } else if mentions(HELP_KEYWORDS) {
        Command::Help
    } else if mentions(CLEAR_KEYWORDS) {
        Command::Clear
    } else {
        Command::Unknown
    }
}
