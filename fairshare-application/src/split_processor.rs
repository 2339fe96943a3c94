use crate::{
    error::{QuickSplitError, SplitError},
    model::{DegradedRow, ParticipantInput, QuickShare, QuickSplit, SplitResult},
    ports::RosterParser,
};
use fairshare_domain::{
    AmountNormalizer, Ledger, Participant, ParticipantId, RawAmount, RemainderPolicy,
    RoundingUnit, ShareAllocator, Units, placeholder_name,
};
use std::borrow::Cow;

/// Largest headcount a quick split accepts; every person gets a row of output.
pub const MAX_QUICK_SPLIT_HEADCOUNT: usize = 10_000;

#[derive(Clone, Copy)]
pub struct SplitProcessor<'a> {
    parser: &'a dyn RosterParser,
    policy: RemainderPolicy,
}

impl<'a> SplitProcessor<'a> {
    pub fn new(parser: &'a dyn RosterParser) -> Self {
        Self {
            parser,
            policy: RemainderPolicy::default(),
        }
    }

    pub fn with_remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn settle_roster<'b>(
        &self,
        content: &'b str,
        rounding_unit: RoundingUnit,
    ) -> Result<SplitResult<'b>, SplitError> {
        let rows = self.parser.parse(content)?;
        self.settle(&rows, rounding_unit)
    }

    /// Normalizes `rows`, computes fair shares and the transfers that settle them.
    ///
    /// Bad amounts never fail the batch: they count as zero and are listed in
    /// `degraded_rows`. Errors are internal-consistency faults only.
    pub fn settle<'b>(
        &self,
        rows: &[ParticipantInput<'b>],
        rounding_unit: RoundingUnit,
    ) -> Result<SplitResult<'b>, SplitError> {
        let (participants, degraded_rows) = Self::normalize_rows(rows, rounding_unit);
        let ledger = Ledger::build(participants, rounding_unit, self.policy)?;
        let settlement = ledger.settle()?;

        tracing::debug!(
            participant_count = settlement.ledger.len(),
            total = %settlement.ledger.total(),
            transfer_count = settlement.transfers.len(),
            degraded_row_count = degraded_rows.len(),
            "Split computed"
        );

        Ok(SplitResult {
            settlement,
            degraded_rows,
        })
    }

    pub fn normalize_rows<'b>(
        rows: &[ParticipantInput<'b>],
        rounding_unit: RoundingUnit,
    ) -> (Vec<Participant<'b>>, Vec<DegradedRow>) {
        let normalizer = AmountNormalizer::new(rounding_unit);
        let mut degraded_rows = Vec::new();

        let participants = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let id = ParticipantId(idx);
                let name = match row.name.map(str::trim) {
                    Some(name) if !name.is_empty() => Cow::Borrowed(name),
                    _ => Cow::Owned(placeholder_name(id)),
                };
                let paid = normalizer.normalize(row.paid).unwrap_or_else(|reason| {
                    degraded_rows.push(DegradedRow { id, reason });
                    normalizer.reject(row.paid, reason)
                });
                Participant::new(name, paid)
            })
            .collect();

        (participants, degraded_rows)
    }

    pub fn quick_split(
        &self,
        total: RawAmount<'_>,
        headcount: usize,
        rounding_unit: RoundingUnit,
    ) -> Result<QuickSplit, QuickSplitError> {
        if headcount == 0 {
            return Err(QuickSplitError::NoPeople);
        }
        if headcount > MAX_QUICK_SPLIT_HEADCOUNT {
            tracing::warn!(
                headcount,
                max = MAX_QUICK_SPLIT_HEADCOUNT,
                reject_reason = "too_many_people",
                "Quick split rejected"
            );
            return Err(QuickSplitError::TooManyPeople {
                max: MAX_QUICK_SPLIT_HEADCOUNT,
            });
        }

        let total = AmountNormalizer::new(rounding_unit).normalize_or_zero(total);
        let divisor = headcount as i64;
        let base_share = Units::from_i64(total.amount() / divisor);
        let remainder = (total.amount() % divisor) as usize;

        let shares = ShareAllocator::allocate(total, headcount, self.policy)
            .into_iter()
            .enumerate()
            .map(|(idx, share)| QuickShare {
                label: placeholder_name(ParticipantId(idx)),
                share,
            })
            .collect();

        Ok(QuickSplit {
            rounding_unit,
            total,
            base_share,
            remainder,
            shares,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterParseError;
    use fairshare_domain::AmountRejection;
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
    fn processor() -> SplitProcessor<'static> {
        SplitProcessor::new(&NOOP_PARSER)
    }

    fn summary<'a>(result: &'a SplitResult<'a>) -> Vec<(&'a str, i64, i64, i64)> {
        result
            .ledger()
            .entries()
            .iter()
            .map(|e| {
                (
                    e.name.as_ref(),
                    e.paid.amount(),
                    e.share.amount(),
                    e.net.amount(),
                )
            })
            .collect()
    }

    fn named_transfers<'a>(result: &'a SplitResult<'a>) -> Vec<(&'a str, &'a str, i64)> {
        result
            .settlement
            .named_transfers()
            .map(|(from, to, amount)| (from, to, amount.amount()))
            .collect()
    }

    #[rstest]
    fn one_payer_for_three(processor: SplitProcessor<'static>) {
        let rows = [
            ParticipantInput::new("Alice", RawAmount::Float(30.00)),
            ParticipantInput::new("Bob", RawAmount::Float(0.00)),
            ParticipantInput::new("Charlie", RawAmount::Float(0.00)),
        ];
        let result = processor
            .settle(&rows, RoundingUnit::Hundredth)
            .expect("split failed");

        assert_eq!(result.ledger().total(), Units::from_i64(3000));
        assert_eq!(
            summary(&result),
            vec![
                ("Alice", 3000, 1000, 2000),
                ("Bob", 0, 1000, -1000),
                ("Charlie", 0, 1000, -1000),
            ]
        );
        assert_eq!(
            named_transfers(&result),
            vec![("Bob", "Alice", 1000), ("Charlie", "Alice", 1000)]
        );
    }

    #[rstest]
    fn leftover_cent_goes_to_first_participant(processor: SplitProcessor<'static>) {
        let rows = [
            ParticipantInput::text("A", "10.00"),
            ParticipantInput::text("B", "10.00"),
            ParticipantInput::text("C", "10.01"),
        ];
        let result = processor
            .settle(&rows, RoundingUnit::Hundredth)
            .expect("split failed");

        assert_eq!(
            summary(&result),
            vec![("A", 1000, 1001, -1), ("B", 1000, 1000, 0), ("C", 1001, 1000, 1)]
        );
        assert_eq!(named_transfers(&result), vec![("A", "C", 1)]);
    }

    #[rstest]
    fn rotation_moves_leftover_cent(processor: SplitProcessor<'static>) {
        let rows = [
            ParticipantInput::text("A", "10.00"),
            ParticipantInput::text("B", "10.00"),
            ParticipantInput::text("C", "10.01"),
        ];
        let result = processor
            .with_remainder_policy(RemainderPolicy::RotateFrom(2))
            .settle(&rows, RoundingUnit::Hundredth)
            .expect("split failed");

        assert_eq!(
            summary(&result),
            vec![("A", 1000, 1000, 0), ("B", 1000, 1000, 0), ("C", 1001, 1001, 0)]
        );
        assert!(result.is_settled());
    }

    #[rstest]
    fn single_participant_is_settled(processor: SplitProcessor<'static>) {
        let rows = [ParticipantInput::text("Solo", "50.00")];
        let result = processor
            .settle(&rows, RoundingUnit::Hundredth)
            .expect("split failed");

        assert_eq!(summary(&result), vec![("Solo", 5000, 5000, 0)]);
        assert!(result.is_settled());
    }

    #[rstest]
    fn empty_list_is_not_an_error(processor: SplitProcessor<'static>) {
        let result = processor
            .settle(&[], RoundingUnit::Hundredth)
            .expect("split failed");

        assert!(result.ledger().is_empty());
        assert_eq!(result.ledger().total(), Units::ZERO);
        assert!(result.is_settled());
        assert!(result.degraded_rows.is_empty());
    }

    #[rstest]
    fn unparseable_amount_counts_as_zero(processor: SplitProcessor<'static>) {
        let rows = [
            ParticipantInput::text("X", "abc"),
            ParticipantInput::new("Y", RawAmount::Float(20.00)),
        ];
        let result = processor
            .settle(&rows, RoundingUnit::Hundredth)
            .expect("split failed");

        assert_eq!(result.ledger().total(), Units::from_i64(2000));
        assert_eq!(
            summary(&result),
            vec![("X", 0, 1000, -1000), ("Y", 2000, 1000, 1000)]
        );
        assert_eq!(
            result.degraded_rows,
            vec![DegradedRow {
                id: ParticipantId(0),
                reason: AmountRejection::Unparseable,
            }]
        );
        assert_eq!(named_transfers(&result), vec![("X", "Y", 1000)]);
    }

    #[rstest]
    #[case::missing(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    fn blank_names_get_placeholders(processor: SplitProcessor<'static>, #[case] name: Option<&str>) {
        let rows = [
            ParticipantInput::text("Alice", "5"),
            ParticipantInput {
                name,
                paid: RawAmount::Missing,
            },
        ];
        let result = processor
            .settle(&rows, RoundingUnit::Whole)
            .expect("split failed");

        assert_eq!(result.ledger().entries()[1].name, "Person 2");
    }

    #[rstest]
    fn names_are_trimmed(processor: SplitProcessor<'static>) {
        let rows = [ParticipantInput::text("  Dana ", "1")];
        let result = processor
            .settle(&rows, RoundingUnit::Whole)
            .expect("split failed");

        assert_eq!(result.ledger().entries()[0].name, "Dana");
    }

    #[rstest]
    fn negative_amount_is_clamped_without_degrading(processor: SplitProcessor<'static>) {
        let rows = [
            ParticipantInput::text("A", "-10"),
            ParticipantInput::text("B", "10"),
        ];
        let result = processor
            .settle(&rows, RoundingUnit::Whole)
            .expect("split failed");

        assert_eq!(summary(&result), vec![("A", 0, 5, -5), ("B", 10, 5, 5)]);
        assert!(result.degraded_rows.is_empty());
    }

    #[rstest]
    #[case::even("30.00", 3, RoundingUnit::Hundredth, 1000, 0, &[1000, 1000, 1000])]
    #[case::uneven("10.00", 3, RoundingUnit::Hundredth, 333, 1, &[334, 333, 333])]
    #[case::whole_units("100", 3, RoundingUnit::Whole, 33, 1, &[34, 33, 33])]
    #[case::nickels("1.00", 3, RoundingUnit::Twentieth, 6, 2, &[7, 7, 6])]
    #[case::garbage_total("abc", 2, RoundingUnit::Hundredth, 0, 0, &[0, 0])]
    fn quick_split_cases(
        processor: SplitProcessor<'static>,
        #[case] total: &str,
        #[case] headcount: usize,
        #[case] unit: RoundingUnit,
        #[case] expected_base: i64,
        #[case] expected_remainder: usize,
        #[case] expected_shares: &[i64],
    ) {
        let split = processor
            .quick_split(RawAmount::Text(total), headcount, unit)
            .expect("quick split failed");

        assert_eq!(split.base_share, Units::from_i64(expected_base));
        assert_eq!(split.remainder, expected_remainder);
        let shares: Vec<i64> = split.shares.iter().map(|s| s.share.amount()).collect();
        assert_eq!(shares, expected_shares);
        assert_eq!(split.shares.iter().map(|s| s.share).sum::<Units>(), split.total);
        assert_eq!(split.shares[0].label, "Person 1");
    }

    #[rstest]
    fn quick_split_requires_people(processor: SplitProcessor<'static>) {
        assert_eq!(
            processor.quick_split(RawAmount::Text("10"), 0, RoundingUnit::Hundredth),
            Err(QuickSplitError::NoPeople)
        );
    }

    #[rstest]
    fn normalize_rows_zeroes_and_records_rejected_amounts() {
        let rows = [
            ParticipantInput::text("A", "abc"),
            ParticipantInput::new("B", RawAmount::Integer(i64::MAX)),
            ParticipantInput::text("C", "1.50"),
        ];

        let (participants, degraded_rows) =
            SplitProcessor::normalize_rows(&rows, RoundingUnit::Hundredth);

        let paid: Vec<i64> = participants.iter().map(|p| p.paid().amount()).collect();
        assert_eq!(paid, vec![0, 0, 150]);
        assert_eq!(
            degraded_rows,
            vec![
                DegradedRow {
                    id: ParticipantId(0),
                    reason: AmountRejection::Unparseable,
                },
                DegradedRow {
                    id: ParticipantId(1),
                    reason: AmountRejection::OutOfRange,
                },
            ]
        );
    }

    #[rstest]
    #[case::just_over(MAX_QUICK_SPLIT_HEADCOUNT + 1)]
    #[case::largest_usize(usize::MAX)]
    fn quick_split_caps_headcount(processor: SplitProcessor<'static>, #[case] headcount: usize) {
        assert_eq!(
            processor.quick_split(RawAmount::Text("10"), headcount, RoundingUnit::Hundredth),
            Err(QuickSplitError::TooManyPeople {
                max: MAX_QUICK_SPLIT_HEADCOUNT
            })
        );
    }

    #[rstest]
    fn quick_split_accepts_max_headcount(processor: SplitProcessor<'static>) {
        let split = processor
            .quick_split(
                RawAmount::Text("10"),
                MAX_QUICK_SPLIT_HEADCOUNT,
                RoundingUnit::Hundredth,
            )
            .expect("quick split failed");

        assert_eq!(split.shares.len(), MAX_QUICK_SPLIT_HEADCOUNT);
        assert_eq!(split.remainder, 1000);
    }

    #[rstest]
    fn quick_split_largest_total_for_one_person(processor: SplitProcessor<'static>) {
        let split = processor
            .quick_split(
                RawAmount::Text("92233720368547758.07"),
                1,
                RoundingUnit::Hundredth,
            )
            .expect("quick split failed");

        assert_eq!(split.total, Units::from_i64(i64::MAX));
        assert_eq!(split.base_share, Units::from_i64(i64::MAX));
        assert_eq!(split.remainder, 0);
        assert_eq!(split.shares.len(), 1);
    }
}
