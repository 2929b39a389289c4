use std::fmt::Display;

#[cfg(feature = "ja")]
pub mod strings {
    pub const ALL_SETTLED: &str = "精算済みです！誰も支払う必要はありません。";
    pub const NO_EXPENSES: &str = "まだ支出が記録されていません。";
    pub const EXPENSES_CLEARED: &str = "すべての支出を削除しました。";
    pub const UNKNOWN_COMMAND: &str =
        "コマンドを理解できませんでした。'help' と入力すると使い方を表示します。";
    pub const BALANCE_HEADER: &str = "支払い一覧:";
    pub const SUMMARY_HEADER: &str = "支出の一覧:";
    pub const EMPTY_SPLIT_GROUP: &str =
        "割り勘の対象者を指定しない支出を記録する前に、参加者を1人以上追加してください。";
    pub const BLANK_PARTICIPANT: &str = "参加者名を空にすることはできません。";
    pub const BLANK_SPLIT_GROUP: &str =
        "割り勘の対象者に名前が含まれていません。split の後に1人以上の名前を指定してください。";
    pub const HELP: &str = "\
次のコマンドを利用できます:
- \"[名前] paid [金額] for [内容] split among/between/with [名前1, 名前2, ...]\"
- \"[名前] paid [金額] for [内容] on [YYYY-MM-DD]\"
- \"balance\" または \"who owes\": 誰が誰にいくら支払うかを表示
- \"summary\" または \"list expenses\": 記録した支出を一覧表示
- \"help\": このメッセージを表示
- \"clear\": すべての支出を削除";

    pub const PERSON: &str = "メンバー";
    pub const BALANCE: &str = "収支";
    pub const STATUS: &str = "状態";
    pub const DATE: &str = "日付";
    pub const DESCRIPTION: &str = "内容";
    pub const AMOUNT: &str = "金額";
    pub const PAID_BY: &str = "支払人";
    pub const SPLIT_AMONG: &str = "割り勘対象";
    pub const SETTLED: &str = "精算済み";
    pub const IS_OWED: &str = "受取予定";
    pub const OWES: &str = "支払予定";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const ALL_SETTLED: &str = "All settled up! No one owes anything.";
    pub const NO_EXPENSES: &str = "No expenses recorded yet.";
    pub const EXPENSES_CLEARED: &str = "All expenses have been cleared.";
    pub const UNKNOWN_COMMAND: &str =
        "I didn't understand that command. Type 'help' to see what I can do.";
    pub const BALANCE_HEADER: &str = "Here's who owes whom:";
    pub const SUMMARY_HEADER: &str = "Expense Summary:";
    pub const EMPTY_SPLIT_GROUP: &str =
        "Add at least one participant before recording an expense without a split group.";
    pub const BLANK_PARTICIPANT: &str = "Participant names must not be blank.";
    pub const BLANK_SPLIT_GROUP: &str =
        "The split list doesn't name anyone. Put at least one name after 'split'.";
    pub const HELP: &str = "\
I understand these commands:
- \"[name] paid [amount] for [description] split among/between/with [person1, person2, ...]\"
- \"[name] paid [amount] for [description] on [YYYY-MM-DD]\"
- \"balance\" or \"who owes\" to see who owes whom
- \"summary\" or \"list expenses\" to see all recorded expenses
- \"help\" to see this message
- \"clear\" to reset all expenses";

    pub const PERSON: &str = "Person";
    pub const BALANCE: &str = "Balance";
    pub const STATUS: &str = "Status";
    pub const DATE: &str = "Date";
    pub const DESCRIPTION: &str = "Description";
    pub const AMOUNT: &str = "Amount";
    pub const PAID_BY: &str = "Paid By";
    pub const SPLIT_AMONG: &str = "Split Among";
    pub const SETTLED: &str = "Settled";
    pub const IS_OWED: &str = "Is Owed";
    pub const OWES: &str = "Owes";
}

pub use strings::*;

pub const EXAMPLE_COMMANDS: &[&str] = &[
    "John paid 50 for dinner split among John, Mary, Bob",
    "Sarah paid 30 for movie tickets split between Sarah and Mike",
    "Alex paid 75 for groceries split with Taylor",
    "balance",
    "summary",
    "help",
    "clear",
];

#[cfg(feature = "ja")]
pub fn expense_added(
    description: impl Display,
    amount: impl Display,
    paid_by: impl Display,
    split_among: impl Display,
) -> String {
    format!(
        "支出を追加しました: {description} - ${amount} ({paid_by} が支払い、{split_among} で割り勘)。"
    )
}

#[cfg(feature = "ja")]
pub fn owes(from: impl Display, to: impl Display, amount: impl Display) -> String {
    format!("{from} は {to} に ${amount} を支払う")
}

#[cfg(feature = "ja")]
pub fn summary_entry(
    index: usize,
    description: impl Display,
    amount: impl Display,
    paid_by: impl Display,
    split_among: impl Display,
) -> String {
    format!("{index}. {description} - ${amount} {paid_by} が支払い、{split_among} で割り勘")
}

#[cfg(feature = "ja")]
pub fn invalid_amount(input: impl Display) -> String {
    format!("金額 '{input}' は無効です。正の数を指定してください。")
}

#[cfg(feature = "ja")]
pub fn invalid_date(input: impl Display) -> String {
    format!("日付 '{input}' は無効です。YYYY-MM-DD 形式で指定してください。")
}

#[cfg(not(feature = "ja"))]
pub fn expense_added(
    description: impl Display,
    amount: impl Display,
    paid_by: impl Display,
    split_among: impl Display,
) -> String {
    format!(
        "Added expense: {description} - ${amount} paid by {paid_by}, split among {split_among}."
    )
}

#[cfg(not(feature = "ja"))]
pub fn owes(from: impl Display, to: impl Display, amount: impl Display) -> String {
    format!("{from} owes {to} ${amount}")
}

#[cfg(not(feature = "ja"))]
pub fn summary_entry(
    index: usize,
    description: impl Display,
    amount: impl Display,
    paid_by: impl Display,
    split_among: impl Display,
) -> String {
    format!("{index}. {description} - ${amount} paid by {paid_by}, split among {split_among}")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_amount(input: impl Display) -> String {
    format!("Invalid amount '{input}'. The amount must be a positive number.")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_date(input: impl Display) -> String {
    format!("Invalid date '{input}'. Use the YYYY-MM-DD format.")
}
