//! Timeline view grouped by month.
//!
//! # Invariants
//! - Records with an empty `date` never appear in any group.
//! - Records are ordered by byte-wise descending `date`. This is not
//!   calendar-aware: only same-format, same-year strings order correctly,
//!   and mixing `MM-DD` with long-form dates gives an arbitrary but
//!   deterministic order. Equal dates keep unit order.
//! - Groups are created in first-appearance order, then stably ordered by
//!   `month_rank` descending; unranked labels (一月..五月 and `近期`) tie
//!   at 0 and trail the ranked groups in first-appearance order.
//! - Zero placeable records yields `TimelineView::NoData`.

use crate::model::record::{RecordItem, RecordKind};
use crate::view::month::{day_label, month_label, month_rank};
use crate::view::{record_path, ViewUnit};
use serde::Serialize;

/// Empty-state text for the timeline tab.
pub const NO_TIMELINE_MESSAGE: &str = "暂无时间线数据";

const SUMMARY_PREFIX: &str = "摘要";
const SUMMARY_LEAD: &str = "摘要：";

/// One record positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub date: String,
    pub day_label: String,
    pub summary_line: Option<String>,
    /// Assessments get a distinct marker.
    pub highlighted: bool,
    pub path: String,
}

impl From<&RecordItem> for TimelineEntry {
    fn from(item: &RecordItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            date: item.date.clone(),
            day_label: day_label(&item.date),
            summary_line: item.summary.as_deref().map(summary_line),
            highlighted: item.kind == RecordKind::Assessment,
            path: record_path(&item.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    pub label: String,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum TimelineView {
    Months(Vec<MonthGroup>),
    NoData,
}

impl TimelineView {
    pub fn months(&self) -> &[MonthGroup] {
        match self {
            Self::Months(months) => months,
            Self::NoData => &[],
        }
    }
}

/// Filters, sorts and buckets records by month label.
///
/// Returned groups are already in display order.
pub fn group_by_month<'a, I>(items: I) -> Vec<(String, Vec<&'a RecordItem>)>
where
    I: IntoIterator<Item = &'a RecordItem>,
{
    let mut dated: Vec<&RecordItem> = items.into_iter().filter(|item| item.has_date()).collect();
    dated.sort_by(|a, b| b.date.cmp(&a.date));

    let mut groups: Vec<(String, Vec<&RecordItem>)> = Vec::new();
    for item in dated {
        let label = month_label(&item.date);
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((label, vec![item])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| month_rank(b).cmp(&month_rank(a)));
    groups
}

/// Builds the timeline from every record of every unit.
pub fn build_timeline_view(units: &[ViewUnit<'_>]) -> TimelineView {
    let groups = group_by_month(units.iter().flat_map(|unit| unit.items.iter().copied()));
    if groups.is_empty() {
        return TimelineView::NoData;
    }

    TimelineView::Months(
        groups
            .into_iter()
            .map(|(label, items)| MonthGroup {
                label,
                entries: items.into_iter().map(TimelineEntry::from).collect(),
            })
            .collect(),
    )
}

fn summary_line(summary: &str) -> String {
    if summary.starts_with(SUMMARY_PREFIX) {
        summary.to_string()
    } else {
        format!("{SUMMARY_LEAD}{summary}")
    }
}
