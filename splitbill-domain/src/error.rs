use crate::model::Money;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("amount {0} is not a positive amount within the supported range")]
    InvalidAmount(Money),
    #[error("expense has nobody to split between")]
    EmptySplitGroup,
    #[error("split list names nobody")]
    BlankSplitGroup,
    #[error("participant name is blank")]
    BlankParticipant,
}
