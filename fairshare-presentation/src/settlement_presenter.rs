use crate::{
    money_formatter::MoneyFormatter,
    text_table::{Alignment, TextTableBuilder},
};
use fairshare_application::SplitResult;
use fairshare_domain::{Ledger, LedgerEntry, ParticipantId, Transfer, placeholder_name};
use fairshare_i18n as i18n;
use std::borrow::Cow;

pub struct SettlementPresenter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementView {
    pub summary: String,
    /// Empty when there are no participants.
    pub breakdown_table: String,
    /// `None` when everyone is already settled.
    pub transfer_table: Option<String>,
    /// One line per participant whose amount was replaced with zero.
    pub notices: Vec<String>,
}

impl SettlementView {
    /// The whole view as printable text, sections separated by blank lines.
    pub fn to_text(&self) -> String {
        let mut sections: Vec<&str> = Vec::with_capacity(4);
        let notices = self.notices.join("\n");
        if !notices.is_empty() {
            sections.push(&notices);
        }
        sections.push(&self.summary);
        if !self.breakdown_table.is_empty() {
            sections.push(self.breakdown_table.trim_end());
        }
        match &self.transfer_table {
            Some(table) => sections.push(table.trim_end()),
            None if !self.breakdown_table.is_empty() => sections.push(i18n::EVERYONE_SETTLED),
            None => {}
        }
        sections.join("\n\n")
    }
}

impl SettlementPresenter {
    pub fn render(result: &SplitResult<'_>, formatter: &MoneyFormatter<'_>) -> SettlementView {
        let ledger = result.ledger();

        let notices = result
            .degraded_rows
            .iter()
            .filter_map(|row| {
                let name = ledger.name(row.id)?;
                Some(i18n::amount_replaced_with_zero(name, row.reason))
            })
            .collect();

        if ledger.is_empty() {
            return SettlementView {
                summary: i18n::NO_PARTICIPANTS.to_string(),
                breakdown_table: String::new(),
                transfer_table: None,
                notices,
            };
        }

        let summary = i18n::settlement_summary(formatter.format(ledger.total()), ledger.len());
        let breakdown_table = Self::build_breakdown_table(ledger.entries(), formatter);
        let transfer_table = (!result.is_settled())
            .then(|| Self::build_transfer_table(ledger, result.transfers(), formatter));

        SettlementView {
            summary,
            breakdown_table,
            transfer_table,
            notices,
        }
    }

    pub fn build_breakdown_table(
        entries: &[LedgerEntry<'_>],
        formatter: &MoneyFormatter<'_>,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::NAME),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::FAIR_SHARE),
                Cow::Borrowed(i18n::NET),
            ]);

        for entry in entries {
            builder = builder.row([
                Cow::Borrowed(entry.name.as_ref()),
                Cow::Owned(formatter.format(entry.paid)),
                Cow::Owned(formatter.format(entry.share)),
                Cow::Owned(formatter.format_signed(entry.net)),
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table(
        ledger: &Ledger<'_>,
        transfers: &[Transfer],
        formatter: &MoneyFormatter<'_>,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ]);

        for transfer in transfers {
            builder = builder.row([
                participant_label(ledger, transfer.from),
                participant_label(ledger, transfer.to),
                Cow::Owned(formatter.format(transfer.amount)),
            ]);
        }

        builder.build()
    }
}

fn participant_label<'a>(ledger: &'a Ledger<'_>, id: ParticipantId) -> Cow<'a, str> {
    match ledger.name(id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(placeholder_name(id)),
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use fairshare_application::{
        ParticipantInput, RosterParseError, RosterParser, SplitProcessor,
    };
    use fairshare_domain::{RawAmount, RoundingUnit};
    use rstest::{fixture, rstest};

    struct NoopParser;

    impl RosterParser for NoopParser {
        fn parse<'a>(
            &self,
            _content: &'a str,
        ) -> Result<Vec<ParticipantInput<'a>>, RosterParseError> {
            Ok(Vec::new())
        }
    }

    static NOOP_PARSER: NoopParser = NoopParser;

    #[fixture]
    fn formatter() -> MoneyFormatter<'static> {
        MoneyFormatter::new("$", RoundingUnit::Hundredth)
    }

    fn split<'a>(rows: &[ParticipantInput<'a>]) -> SplitResult<'a> {
        SplitProcessor::new(&NOOP_PARSER)
            .settle(rows, RoundingUnit::Hundredth)
            .expect("split failed")
    }

    #[rstest]
    fn render_one_payer(formatter: MoneyFormatter<'static>) {
        let result = split(&[
            ParticipantInput::text("Alice", "30"),
            ParticipantInput::text("Bob", "0"),
            ParticipantInput::text("Charlie", "0"),
        ]);

        let view = SettlementPresenter::render(&result, &formatter);

        assert_eq!(view.summary, "Total paid: $30.00 | Headcount: 3");
        assert_eq!(
            view.breakdown_table,
            "Name    |   Paid | Fair share | Net (+receive / -owe)\n\
             --------+--------+------------+----------------------\n\
             Alice   | $30.00 |     $10.00 |               +$20.00\n\
             Bob     |  $0.00 |     $10.00 |               -$10.00\n\
             Charlie |  $0.00 |     $10.00 |               -$10.00\n"
        );
        assert_eq!(
            view.transfer_table.as_deref(),
            Some(
                "From    | To    | Amount\n\
                 --------+-------+-------\n\
                 Bob     | Alice | $10.00\n\
                 Charlie | Alice | $10.00\n"
            )
        );
        assert!(view.notices.is_empty());
    }

    #[rstest]
    fn render_settled_group_has_no_transfer_table(formatter: MoneyFormatter<'static>) {
        let result = split(&[
            ParticipantInput::text("Alice", "10"),
            ParticipantInput::text("Bob", "10"),
        ]);

        let view = SettlementPresenter::render(&result, &formatter);

        assert_eq!(view.transfer_table, None);
        assert!(view.to_text().ends_with(i18n::EVERYONE_SETTLED));
    }

    #[rstest]
    fn render_empty_roster(formatter: MoneyFormatter<'static>) {
        let result = split(&[]);

        let view = SettlementPresenter::render(&result, &formatter);

        assert_eq!(view.summary, i18n::NO_PARTICIPANTS);
        assert!(view.breakdown_table.is_empty());
        assert_eq!(view.transfer_table, None);
        assert_eq!(view.to_text(), i18n::NO_PARTICIPANTS);
    }

    #[rstest]
    fn render_lists_degraded_rows(formatter: MoneyFormatter<'static>) {
        let result = split(&[
            ParticipantInput::text("Alice", "ten"),
            ParticipantInput::new("Bob", RawAmount::Integer(20)),
        ]);

        let view = SettlementPresenter::render(&result, &formatter);

        assert_eq!(
            view.notices,
            vec!["Treated Alice's amount as 0 (amount is not a number)".to_string()]
        );
        assert!(view.to_text().starts_with("Treated Alice's amount as 0"));
    }
}
