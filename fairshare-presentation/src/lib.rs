#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod money_formatter;
pub mod quick_split_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use error_presenter::{format_quick_split_error, format_split_error};
pub use money_formatter::{DEFAULT_CURRENCY, MoneyFormatter};
pub use quick_split_presenter::{QuickSplitPresenter, QuickSplitView};
pub use settlement_presenter::{SettlementPresenter, SettlementView};
pub use text_table::{Alignment, TextTableBuilder};
