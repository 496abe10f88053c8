//! Teacher and parent message screens.

use crate::model::record::RecordItem;
use crate::route::Route;
use crate::screen::{bottom_nav, profile_subtitle, Action, Header, NavEntry};
use crate::store::catalog::RecordSource;
use serde::Serialize;

const TEACHER_MESSAGES_TITLE: &str = "老师寄语";
const PARENT_MESSAGES_TITLE: &str = "家长留言";

/// One card of the teacher-message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherMessageSummary {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub avatar: Option<String>,
    pub date: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub path: String,
}

impl From<&RecordItem> for TeacherMessageSummary {
    fn from(message: &RecordItem) -> Self {
        let feedback = message.teacher_feedback.as_ref();
        Self {
            id: message.id.clone(),
            title: message.title.clone(),
            author: feedback.map(|f| f.name.clone()),
            avatar: feedback.map(|f| f.avatar.clone()),
            date: message.date.clone(),
            summary: message.summary.clone(),
            tags: message.tags.clone(),
            path: Route::TeacherMessage(message.id.clone()).path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherMessagesScreen {
    pub header: Header,
    pub messages: Vec<TeacherMessageSummary>,
    pub nav: Vec<NavEntry>,
}

impl TeacherMessagesScreen {
    pub fn build<S: RecordSource>(source: &S) -> Self {
        let route = Route::TeacherMessages;
        let user = source.user();
        Self {
            header: Header::new(
                TEACHER_MESSAGES_TITLE,
                Some(profile_subtitle(&user.name, &user.class_name)),
                &route,
            ),
            messages: source
                .teacher_messages()
                .iter()
                .map(TeacherMessageSummary::from)
                .collect(),
            nav: bottom_nav(&route.path()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherMessageDetailScreen {
    /// Id of the message actually shown, after fallback.
    pub message_id: String,
    pub header: Header,
    pub author: Option<String>,
    pub avatar: Option<String>,
    pub feedback_date: Option<String>,
    pub content: Option<String>,
    pub tags: Vec<String>,
}

impl TeacherMessageDetailScreen {
    /// Builds the screen for `requested_id`, falling back to the first
    /// teacher message when it does not resolve.
    pub fn build<S: RecordSource>(source: &S, requested_id: &str) -> Self {
        let message = source.teacher_message(requested_id);
        let route = Route::TeacherMessage(requested_id.to_string());
        let feedback = message.teacher_feedback.as_ref();
        Self {
            message_id: message.id.clone(),
            header: Header::new(message.title.clone(), None, &route),
            author: feedback.map(|f| f.name.clone()),
            avatar: feedback.map(|f| f.avatar.clone()),
            feedback_date: feedback.map(|f| f.date.clone()),
            content: feedback.map(|f| f.content.clone()),
            tags: message.tags.clone(),
        }
    }
}

/// One card of the parent-message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentMessageCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentMessagesScreen {
    pub header: Header,
    pub messages: Vec<ParentMessageCard>,
    pub compose: Action,
    pub nav: Vec<NavEntry>,
}

impl ParentMessagesScreen {
    pub fn build<S: RecordSource>(source: &S) -> Self {
        let route = Route::ParentMessages;
        let user = source.user();
        Self {
            header: Header::new(
                PARENT_MESSAGES_TITLE,
                Some(profile_subtitle(&user.name, &user.class_name)),
                &route,
            ),
            messages: source
                .parent_messages()
                .iter()
                .map(|message| ParentMessageCard {
                    id: message.id.clone(),
                    title: message.title.clone(),
                    date: message.date.clone(),
                    summary: message.summary.clone(),
                    image: message.image.clone(),
                    tags: message.tags.clone(),
                })
                .collect(),
            compose: Action::to("写留言", Route::AddComment),
            nav: bottom_nav(&route.path()),
        }
    }
}
