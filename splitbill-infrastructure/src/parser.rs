use splitbill_application::{Command, CommandParser, ExpenseRequest};
use splitbill_parser::{Command as ParserCommand, ExpenseCommand, parse_command};

#[derive(Default, Clone, Copy)]
pub struct NomCommandParser;

impl CommandParser for NomCommandParser {
    fn parse<'a>(&self, input: &'a str) -> Command<'a> {
        match parse_command(input) {
            ParserCommand::AddExpense(expense) => Command::AddExpense(to_request(expense)),
            ParserCommand::Balance => Command::ShowBalance,
            ParserCommand::Summary => Command::ShowSummary,
            ParserCommand::Help => Command::Help,
            ParserCommand::Clear => Command::Clear,
            ParserCommand::Unknown => Command::Unknown,
        }
    }
}

fn to_request(expense: ExpenseCommand<'_>) -> ExpenseRequest<'_> {
    let ExpenseCommand {
        payer,
        amount,
        description,
        split_among,
        date,
    } = expense;
    ExpenseRequest {
        payer,
        amount,
        description,
        split_among,
        date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::balance("who owes whom?", Command::ShowBalance)]
    #[case::summary("show summary", Command::ShowSummary)]
    #[case::help("help", Command::Help)]
    #[case::clear("reset everything", Command::Clear)]
    #[case::unknown("hello there", Command::Unknown)]
    fn maps_intents(#[case] input: &str, #[case] expected: Command<'static>) {
        assert_eq!(NomCommandParser.parse(input), expected);
    }

    #[rstest]
    fn maps_expense_fields() {
        let command = NomCommandParser.parse("Alex paid 75 for lunch split with Taylor on 2024-03-01");
        assert_eq!(
            command,
            Command::AddExpense(ExpenseRequest {
                payer: "Alex",
                amount: "75",
                description: "lunch",
                split_among: Some(vec!["Taylor"]),
                date: Some("2024-03-01"),
            })
        );
    }
}
