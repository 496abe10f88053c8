//! Parent comments and simulated comment drafts.
//!
//! # Responsibility
//! - Model seeded parent comments shown on record detail.
//! - Model the receipt of a simulated comment submission.
//!
//! # Invariants
//! - A `CommentDraft` is never written back into the catalog.
//! - `draft_id` is generated per submission and never reused.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one simulated submission.
pub type DraftId = Uuid;

/// Whether a teacher has answered a parent comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    Replied,
    AwaitingReply,
}

impl ReplyStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Replied => "老师已回复",
            Self::AwaitingReply => "待老师回复",
        }
    }
}

/// One parent comment on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentComment {
    pub author: String,
    pub avatar: String,
    /// Long-form display timestamp, e.g. `2023年10月27日 09:15`.
    pub posted_at: String,
    pub content: String,
    pub reply_status: ReplyStatus,
}

/// Receipt of a simulated comment submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub draft_id: DraftId,
    pub linked_node: String,
    pub linked_subject: String,
    pub text: String,
    pub photos: Vec<String>,
}

impl CommentDraft {
    /// Creates a draft receipt with a generated id.
    pub fn new(
        linked_node: impl Into<String>,
        linked_subject: impl Into<String>,
        text: impl Into<String>,
        photos: Vec<String>,
    ) -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            linked_node: linked_node.into(),
            linked_subject: linked_subject.into(),
            text: text.into(),
            photos,
        }
    }
}
