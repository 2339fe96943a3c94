use fairshare_application::{QuickSplitError, RosterParseError, SplitError};
use fairshare_i18n as i18n;

pub fn format_split_error(error: &SplitError) -> String {
    match error {
        SplitError::Roster(RosterParseError::SyntaxError { line, detail }) => {
            i18n::line_error(*line, detail)
        }
        SplitError::Ledger(error) => format!("{}: {error}", i18n::SETTLEMENT_CALCULATION_FAILED),
        SplitError::Settlement(error) => {
            format!("{}: {error}", i18n::SETTLEMENT_CALCULATION_FAILED)
        }
    }
}

pub fn format_quick_split_error(error: &QuickSplitError) -> String {
    match error {
        QuickSplitError::NoPeople => i18n::NO_PARTICIPANTS.to_string(),
        QuickSplitError::TooManyPeople { max } => i18n::too_many_people(*max),
    }
}
