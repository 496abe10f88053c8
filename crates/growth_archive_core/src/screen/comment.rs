//! Add-comment screen and simulated submission.
//!
//! # Invariants
//! - Draft text never exceeds the configured character limit.
//! - Submission returns a receipt and never touches the catalog.

use crate::config::ViewerConfig;
use crate::model::comment::CommentDraft;
use crate::route::Route;
use crate::screen::{Header, MetaRow};
use crate::store::catalog::RecordSource;
use log::info;
use serde::Serialize;

const SCREEN_TITLE: &str = "写点评";
const INPUT_TITLE: &str = "点评内容";
const PLACEHOLDER: &str = "请输入您对孩子本次表现的点评，分享您的鼓励和建议。";
const PHOTOS_TITLE: &str = "添加照片";
const SUBMIT_LABEL: &str = "提交";

/// Local state of the add-comment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentComposer {
    linked_node: String,
    linked_subject: String,
    text: String,
    photos: Vec<String>,
    max_chars: usize,
}

impl CommentComposer {
    /// Starts an empty draft bound to the catalog's comment context.
    pub fn new<S: RecordSource>(source: &S, config: &ViewerConfig) -> Self {
        let context = source.comment_context();
        Self {
            linked_node: context.linked_node.clone(),
            linked_subject: context.linked_subject.clone(),
            text: String::new(),
            photos: context.attached_photos.clone(),
            max_chars: config.comment_max_chars,
        }
    }

    /// Replaces the draft text, truncating to the character limit.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_chars).collect();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// `count/limit` label under the input.
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.char_count(), self.max_chars)
    }

    pub fn attach_photo(&mut self, url: impl Into<String>) {
        self.photos.push(url.into());
    }

    /// Removes the photo at `index`; out-of-range indexes are ignored.
    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    /// Simulates submission and returns the receipt.
    ///
    /// Nothing is persisted; callers navigate back afterwards.
    pub fn submit(self) -> CommentDraft {
        let draft = CommentDraft::new(
            self.linked_node,
            self.linked_subject,
            self.text,
            self.photos,
        );
        info!(
            "event=comment_submitted module=screen status=simulated draft_id={} chars={} photos={}",
            draft.draft_id,
            draft.text.chars().count(),
            draft.photos.len()
        );
        draft
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCommentScreen {
    pub header: Header,
    pub linked: Vec<MetaRow>,
    pub input_title: String,
    pub placeholder: String,
    pub text: String,
    pub counter: String,
    pub photos_title: String,
    pub photos: Vec<String>,
    pub submit_label: String,
}

impl AddCommentScreen {
    pub fn build(composer: &CommentComposer) -> Self {
        Self {
            header: Header::new(SCREEN_TITLE, None, &Route::AddComment),
            linked: vec![
                MetaRow::new("关联节点", composer.linked_node.clone()),
                MetaRow::new("关联科目", composer.linked_subject.clone()),
            ],
            input_title: INPUT_TITLE.to_string(),
            placeholder: PLACEHOLDER.to_string(),
            text: composer.text.clone(),
            counter: composer.counter_label(),
            photos_title: PHOTOS_TITLE.to_string(),
            photos: composer.photos.clone(),
            submit_label: SUBMIT_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AddCommentScreen, CommentComposer};
    use crate::config::ViewerConfig;
    use crate::store::catalog::Catalog;

    fn composer(max_chars: usize) -> CommentComposer {
        let config = ViewerConfig {
            comment_max_chars: max_chars,
            ..ViewerConfig::default()
        };
        CommentComposer::new(Catalog::builtin(), &config)
    }

    #[test]
    fn text_is_truncated_by_characters_not_bytes() {
        let mut draft = composer(4);
        draft.set_text("孩子很棒继续加油");
        assert_eq!(draft.text(), "孩子很棒");
        assert_eq!(draft.counter_label(), "4/4");
    }

    #[test]
    fn photo_edits_ignore_out_of_range_removal() {
        let mut draft = composer(500);
        let seeded = draft.photos().len();
        draft.attach_photo("https://picsum.photos/id/40/200/200");
        draft.remove_photo(99);
        assert_eq!(draft.photos().len(), seeded + 1);
        draft.remove_photo(0);
        assert_eq!(draft.photos().len(), seeded);
    }

    #[test]
    fn submit_returns_receipt_with_fresh_id() {
        let mut first = composer(500);
        first.set_text("谢谢老师");
        let screen = AddCommentScreen::build(&first);
        assert_eq!(screen.counter, "4/500");
        assert_eq!(screen.linked[0].value, "第一学期总结");

        let a = first.submit();
        let b = composer(500).submit();
        assert_eq!(a.text, "谢谢老师");
        assert_eq!(a.linked_subject, "数学");
        assert_ne!(a.draft_id, b.draft_id);
    }
}
