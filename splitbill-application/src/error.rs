use splitbill_domain::LedgerError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("invalid date '{0}'")]
    InvalidDate(String),
    #[error("split group is empty")]
    EmptySplitGroup,
    #[error("split list names nobody")]
    BlankSplitGroup,
    #[error("participant name is blank")]
    BlankParticipant,
}

impl CommandError {
    /// Maps a ledger rejection, keeping the amount as the user typed it.
    pub fn from_ledger(err: LedgerError, amount_text: &str) -> Self {
        match err {
            LedgerError::InvalidAmount(_) => CommandError::InvalidAmount(amount_text.to_string()),
            LedgerError::EmptySplitGroup => CommandError::EmptySplitGroup,
            LedgerError::BlankSplitGroup => CommandError::BlankSplitGroup,
            LedgerError::BlankParticipant => CommandError::BlankParticipant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown date policy '{0}' (expected 'lenient' or 'strict')")]
pub struct UnknownDatePolicy(pub String);
