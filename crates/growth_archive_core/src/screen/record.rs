//! Record detail screen.

use crate::model::comment::ParentComment;
use crate::route::Route;
use crate::screen::{Action, Header, MetaRow};
use crate::store::catalog::RecordSource;
use serde::Serialize;

const CONTENT_TITLE: &str = "记录内容";
const PHOTOS_TITLE: &str = "相关照片";
const COMMENTS_TITLE: &str = "家长点评";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub author: String,
    pub avatar: String,
    pub posted_at: String,
    pub content: String,
    pub status_label: String,
}

impl From<&ParentComment> for CommentView {
    fn from(comment: &ParentComment) -> Self {
        Self {
            author: comment.author.clone(),
            avatar: comment.avatar.clone(),
            posted_at: comment.posted_at.clone(),
            content: comment.content.clone(),
            status_label: comment.reply_status.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDetailScreen {
    /// Id of the record actually shown, after fallback.
    pub record_id: String,
    pub header: Header,
    pub meta: Vec<MetaRow>,
    pub content_title: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub photos_title: String,
    pub photos: Vec<String>,
    pub comments_title: String,
    pub comments: Vec<CommentView>,
    pub actions: Vec<Action>,
}

impl RecordDetailScreen {
    /// Builds the screen for `requested_id`, falling back to the default
    /// record when it does not resolve.
    pub fn build<S: RecordSource>(source: &S, requested_id: &str) -> Self {
        let record = source.record(requested_id);
        let user = source.user();
        let route = Route::Record(requested_id.to_string());

        let mut meta = vec![
            MetaRow::new("幼儿姓名", user.name.clone()),
            MetaRow::new("班级", user.class_name.clone()),
            MetaRow::new("日期", record.date.clone()),
        ];
        if let Some(score) = &record.score_label {
            meta.push(MetaRow::new("评价", score.clone()));
        }

        Self {
            record_id: record.id.clone(),
            header: Header::new(record.title.clone(), None, &route),
            meta,
            content_title: CONTENT_TITLE.to_string(),
            summary: record.summary.clone(),
            tags: record.tags.clone(),
            photos_title: PHOTOS_TITLE.to_string(),
            photos: record.image.iter().cloned().collect(),
            comments_title: COMMENTS_TITLE.to_string(),
            comments: source
                .parent_comments()
                .iter()
                .map(CommentView::from)
                .collect(),
            actions: vec![
                Action::to("写点评", Route::AddComment),
                Action::back("返回列表"),
            ],
        }
    }
}
