//! Record item domain model.
//!
//! # Responsibility
//! - Define the smallest archive unit shown by every view mode.
//! - Carry optional presentation fields (summary, tags, photo, score).
//!
//! # Invariants
//! - `id` is unique within the containing collection.
//! - `date` is a display string and is never validated as a calendar date.
//! - Records are constructed once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Stable identifier of one record item, e.g. `lang-1`.
pub type RecordId = String;

/// Kind of one archive record.
///
/// The first five kinds belong to the kindergarten growth schema; `Exam` and
/// `Assignment` come from the older subject/unit schema, which shares
/// `Activity` and `Feedback` with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Teacher observation of day-to-day behavior.
    Observation,
    /// Artwork or handicraft produced by the child.
    Artwork,
    /// Structured assessment with a score label.
    Assessment,
    /// Participation in a class or outdoor activity.
    Activity,
    /// Written feedback from a teacher or parent.
    Feedback,
    /// Subject exam result.
    Exam,
    /// Subject homework assignment.
    Assignment,
}

impl RecordKind {
    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Observation => "观察记录",
            Self::Artwork => "作品",
            Self::Assessment => "测评",
            Self::Activity => "活动",
            Self::Feedback => "反馈",
            Self::Exam => "考试",
            Self::Assignment => "作业",
        }
    }
}

/// Teacher-authored feedback attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherFeedback {
    /// Avatar image URL. Carried as-is, never fetched.
    pub avatar: String,
    pub name: String,
    /// Long-form display date, e.g. `2024年11月15日`.
    pub date: String,
    pub content: String,
    #[serde(default)]
    pub audio_duration: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
}

/// One dated archive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordItem {
    pub id: RecordId,
    pub title: String,
    /// Serialized as `type` to match the archive schema naming.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Free-form display date (`MM-DD` or CJK long form). May be empty.
    pub date: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Photo URL. Carried as-is, never fetched.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub score_label: Option<String>,
    #[serde(default)]
    pub teacher_feedback: Option<TeacherFeedback>,
}

impl RecordItem {
    /// Creates a record with all optional presentation fields unset.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: RecordKind,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            date: date.into(),
            summary: None,
            tags: Vec::new(),
            image: None,
            score_label: None,
            teacher_feedback: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| (*tag).to_string()).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_score_label(mut self, score_label: impl Into<String>) -> Self {
        self.score_label = Some(score_label.into());
        self
    }

    pub fn with_teacher_feedback(mut self, feedback: TeacherFeedback) -> Self {
        self.teacher_feedback = Some(feedback);
        self
    }

    /// Returns whether this record can be placed on the timeline.
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordItem, RecordKind};

    #[test]
    fn builder_sets_optional_fields() {
        let item = RecordItem::new("craft-1", "秋叶拼贴画", RecordKind::Artwork, "11-20")
            .with_summary("落叶拼贴")
            .with_tags(&["创意丰富", "作品展示"])
            .with_image("https://picsum.photos/id/28/200/200");

        assert_eq!(item.summary.as_deref(), Some("落叶拼贴"));
        assert_eq!(item.tags, vec!["创意丰富", "作品展示"]);
        assert!(item.image.is_some());
        assert!(item.score_label.is_none());
        assert!(item.has_date());
    }

    #[test]
    fn empty_date_is_not_placeable() {
        let item = RecordItem::new("x", "untitled", RecordKind::Observation, "");
        assert!(!item.has_date());
    }

    #[test]
    fn kind_labels_are_user_facing() {
        assert_eq!(RecordKind::Artwork.label(), "作品");
        assert_eq!(RecordKind::Assessment.label(), "测评");
    }
}
