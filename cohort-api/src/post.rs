use uuid::Uuid;

use crate::{CourseId, Reply, Time, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn stub() -> PostId {
        PostId(STUB_UUID)
    }
}

/// A post-detail payload: the post itself plus its full reply list.
///
/// Replies deleted on the backend come through as JSON `null` entries;
/// `cohort-client` drops them at ingestion.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub course_id: CourseId,

    pub author: Option<String>,
    pub title: String,
    pub body: String,

    pub created_at: Time,
    pub modified_at: Option<Time>,

    pub pinned: bool,
    pub upvotes: i64,
    pub tags: Vec<String>,

    pub replies: Vec<Option<Reply>>,
}
