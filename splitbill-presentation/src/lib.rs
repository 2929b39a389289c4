#![warn(clippy::uninlined_format_args)]

pub mod report_presenter;
pub mod response_presenter;
pub mod text_table;

pub use report_presenter::{BalancePresenter, HistoryPresenter};
pub use response_presenter::ResponsePresenter;
