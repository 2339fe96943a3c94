#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const NAME: &str = "名前";
    pub const PAID: &str = "支払額";
    pub const FAIR_SHARE: &str = "負担額";
    pub const NET: &str = "差額 (+受取 / -支払)";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const PERSON: &str = "人";
    pub const SHARE: &str = "負担額";
    pub const TOTAL_PAID: &str = "支払総額";
    pub const HEADCOUNT: &str = "人数";
    pub const EVERYONE_SETTLED: &str = "全員の精算が完了しています。送金は不要です。";
    pub const NO_PARTICIPANTS: &str = "参加者を1人以上追加してください。";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "清算の計算に失敗しました";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const NAME: &str = "Name";
    pub const PAID: &str = "Paid";
    pub const FAIR_SHARE: &str = "Fair share";
    pub const NET: &str = "Net (+receive / -owe)";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const PERSON: &str = "Person";
    pub const SHARE: &str = "Share";
    pub const TOTAL_PAID: &str = "Total paid";
    pub const HEADCOUNT: &str = "Headcount";
    pub const EVERYONE_SETTLED: &str = "Everyone is already settled. No transfers needed.";
    pub const NO_PARTICIPANTS: &str = "Add at least one person to begin.";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn quick_split_summary(
    base_share: impl std::fmt::Display,
    remainder: usize,
    bumped_share: impl std::fmt::Display,
) -> String {
    format!("1人あたり約 {base_share}（端数処理により {remainder} 人は {bumped_share}）")
}

#[cfg(not(feature = "ja"))]
pub fn quick_split_summary(
    base_share: impl std::fmt::Display,
    remainder: usize,
    bumped_share: impl std::fmt::Display,
) -> String {
    format!(
        "Each person owes approximately {base_share} (with {remainder} person(s) paying {bumped_share} due to rounding)."
    )
}

#[cfg(feature = "ja")]
pub fn line_error(line: usize, error: impl std::fmt::Display) -> String {
    format!("行 {line}: {error}")
}

#[cfg(not(feature = "ja"))]
pub fn line_error(line: usize, error: impl std::fmt::Display) -> String {
    format!("Line {line}: {error}")
}

#[cfg(feature = "ja")]
pub fn settlement_summary(total: impl std::fmt::Display, headcount: usize) -> String {
    format!("{TOTAL_PAID}: {total} / {HEADCOUNT}: {headcount}")
}

#[cfg(not(feature = "ja"))]
pub fn settlement_summary(total: impl std::fmt::Display, headcount: usize) -> String {
    format!("{TOTAL_PAID}: {total} | {HEADCOUNT}: {headcount}")
}

#[cfg(feature = "ja")]
pub fn amount_replaced_with_zero(
    name: impl std::fmt::Display,
    reason: impl std::fmt::Display,
) -> String {
    format!("{name} の金額を 0 として扱いました（{reason}）")
}

#[cfg(not(feature = "ja"))]
pub fn amount_replaced_with_zero(
    name: impl std::fmt::Display,
    reason: impl std::fmt::Display,
) -> String {
    format!("Treated {name}'s amount as 0 ({reason})")
}

#[cfg(feature = "ja")]
pub fn even_split_summary(share: impl std::fmt::Display) -> String {
    format!("1人あたり {share}")
}

#[cfg(not(feature = "ja"))]
pub fn even_split_summary(share: impl std::fmt::Display) -> String {
    format!("Each person owes exactly {share}.")
}

#[cfg(feature = "ja")]
pub fn too_many_people(max: usize) -> String {
    format!("人数は {max} 人以下にしてください。")
}

#[cfg(not(feature = "ja"))]
pub fn too_many_people(max: usize) -> String {
    format!("Headcount must be at most {max}.")
}
