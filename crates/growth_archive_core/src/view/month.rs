//! Month and day labels for timeline grouping.
//!
//! # Responsibility
//! - Classify free-form display dates into CJK month labels.
//! - Rank month labels for timeline group ordering.
//!
//! # Invariants
//! - Two date grammars are honored: CJK long form (`2024年9月1日`) and
//!   dash form (`11-25`). Anything else is labelled `近期`.
//! - Classification never fails.
//! - The rank table covers 六月..十二月; every other label ranks 0.

use once_cell::sync::Lazy;
use regex::Regex;

/// Label for dates without an extractable month.
pub const RECENT_LABEL: &str = "近期";

const MONTH_NAMES: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

// Labels outside this table (一月..五月, 近期) tie at 0.
const MONTH_RANKS: [(&str, u32); 7] = [
    ("十二月", 12),
    ("十一月", 11),
    ("十月", 10),
    ("九月", 9),
    ("八月", 8),
    ("七月", 7),
    ("六月", 6),
];

const CJK_MONTH_MARKER: char = '月';
const CJK_DAY_MARKER: char = '日';

static CJK_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)月").expect("valid cjk month regex"));
static CJK_MONTH_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)月([0-9]+)日").expect("valid cjk month-day regex"));
static LEADING_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-9]+)").expect("valid leading number regex"));

/// Grammar a date string was classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGrammar {
    /// Contains `月` with a number in front of it.
    CjkLongForm,
    /// First `-`-separated token starts with a number.
    DashSeparated,
    /// No month number could be extracted.
    Unrecognized,
}

/// Extracts the raw month number and the grammar that produced it.
///
/// The CJK branch wins whenever it finds a number, even an out-of-range one.
/// When the string contains `月` without a number in front of it, the dash
/// branch is tried next.
pub fn classify_date(date: &str) -> (DateGrammar, Option<u32>) {
    if date.contains(CJK_MONTH_MARKER) {
        if let Some(caps) = CJK_MONTH_RE.captures(date) {
            let month = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            return (DateGrammar::CjkLongForm, month);
        }
    }

    let first_token = date.split('-').next().unwrap_or_default();
    match LEADING_NUMBER_RE.captures(first_token) {
        Some(caps) => (
            DateGrammar::DashSeparated,
            caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()),
        ),
        None => (DateGrammar::Unrecognized, None),
    }
}

/// Returns the 1-based month of `date` when it falls in `1..=12`.
pub fn month_number(date: &str) -> Option<u32> {
    classify_date(date)
        .1
        .filter(|month| (1..=12).contains(month))
}

/// Maps a date string to its CJK month label, or `近期`.
pub fn month_label(date: &str) -> String {
    match month_number(date) {
        Some(month) => MONTH_NAMES[(month - 1) as usize].to_string(),
        None => RECENT_LABEL.to_string(),
    }
}

/// Rank used to order month groups, highest first.
pub fn month_rank(label: &str) -> u32 {
    MONTH_RANKS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Short day label shown beside a timeline entry.
///
/// Dash-form dates are shown as-is. Long-form dates containing `日` are
/// normalized to zero-padded `MM-DD`, falling back to the raw string.
pub fn day_label(date: &str) -> String {
    if !date.contains(CJK_DAY_MARKER) {
        return date.to_string();
    }
    CJK_MONTH_DAY_RE
        .captures(date)
        .and_then(|caps| {
            let month = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let day = caps.get(2)?.as_str().parse::<u32>().ok()?;
            Some(format!("{month:02}-{day:02}"))
        })
        .unwrap_or_else(|| date.to_string())
}
