use crate::{
    money_formatter::MoneyFormatter,
    text_table::{Alignment, TextTableBuilder},
};
use fairshare_application::QuickSplit;
use fairshare_domain::Units;
use fairshare_i18n as i18n;
use std::borrow::Cow;

pub struct QuickSplitPresenter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickSplitView {
    pub summary: String,
    pub share_table: String,
}

impl QuickSplitView {
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.summary, self.share_table.trim_end())
    }
}

impl QuickSplitPresenter {
    pub fn render(split: &QuickSplit, formatter: &MoneyFormatter<'_>) -> QuickSplitView {
        let bumped_share = (split.remainder > 0)
            .then(|| split.base_share.checked_add(Units::from_i64(1)))
            .flatten();
        let summary = match bumped_share {
            Some(bumped_share) => i18n::quick_split_summary(
                formatter.format(split.base_share),
                split.remainder,
                formatter.format(bumped_share),
            ),
            None => i18n::even_split_summary(formatter.format(split.base_share)),
        };

        let share_table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::PERSON), Cow::Borrowed(i18n::SHARE)])
            .rows(split.shares.iter().map(|share| {
                [
                    Cow::Borrowed(share.label.as_str()),
                    Cow::Owned(formatter.format(share.share)),
                ]
            }))
            .build();

        QuickSplitView {
            summary,
            share_table,
        }
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use fairshare_application::QuickShare;
    use fairshare_domain::RoundingUnit;
    use rstest::rstest;

    fn quick_split(base_share: i64, shares: &[i64]) -> QuickSplit {
        QuickSplit {
            rounding_unit: RoundingUnit::Hundredth,
            total: Units::from_i64(shares.iter().sum()),
            base_share: Units::from_i64(base_share),
            remainder: shares.iter().filter(|s| **s > base_share).count(),
            shares: shares
                .iter()
                .enumerate()
                .map(|(idx, share)| QuickShare {
                    label: format!("Person {}", idx + 1),
                    share: Units::from_i64(*share),
                })
                .collect(),
        }
    }

    #[rstest]
    fn render_ten_among_three() {
        let formatter = MoneyFormatter::new("₹", RoundingUnit::Hundredth);

        let view = QuickSplitPresenter::render(&quick_split(333, &[334, 333, 333]), &formatter);

        assert_eq!(
            view.summary,
            "Each person owes approximately ₹3.33 (with 1 person(s) paying ₹3.34 due to rounding)."
        );
        assert_eq!(
            view.share_table,
            "Person   | Share\n\
             ---------+------\n\
             Person 1 | ₹3.34\n\
             Person 2 | ₹3.33\n\
             Person 3 | ₹3.33\n"
        );
    }

    #[rstest]
    fn render_even_split_reports_no_remainder() {
        let formatter = MoneyFormatter::new("$", RoundingUnit::Whole);

        let view = QuickSplitPresenter::render(&quick_split(5, &[5, 5]), &formatter);

        assert_eq!(view.summary, "Each person owes exactly $5.00.");
        assert!(view.to_text().ends_with("Person 2 | $5.00"));
    }

    #[rstest]
    fn render_largest_total_for_one_person() {
        let formatter = MoneyFormatter::new("$", RoundingUnit::Hundredth);

        let view = QuickSplitPresenter::render(&quick_split(i64::MAX, &[i64::MAX]), &formatter);

        assert_eq!(
            view.summary,
            "Each person owes exactly $92,233,720,368,547,758.07."
        );
        assert!(view.share_table.contains("$92,233,720,368,547,758.07"));
    }
}
