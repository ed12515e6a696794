use std::sync::Arc;

use crate::{api, Thread};

/// A post as the client holds it between fetches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    pub id: api::PostId,
    pub course_id: api::CourseId,

    pub author: Option<String>,
    pub title: String,
    pub body: String,

    pub created_at: api::Time,
    pub modified_at: Option<api::Time>,

    pub pinned: bool,
    pub upvotes: i64,
    pub tags: Vec<String>,

    /// Reply list in backend delivery order, `null` payload entries dropped.
    pub replies: Vec<Arc<api::Reply>>,
}

impl From<api::Post> for Post {
    fn from(p: api::Post) -> Post {
        Post {
            id: p.id,
            course_id: p.course_id,
            author: p.author,
            title: p.title,
            body: p.body,
            created_at: p.created_at,
            modified_at: p.modified_at,
            pinned: p.pinned,
            upvotes: p.upvotes,
            tags: p.tags,
            replies: ingest(p.replies),
        }
    }
}

fn ingest(replies: Vec<Option<api::Reply>>) -> Vec<Arc<api::Reply>> {
    let total = replies.len();
    let replies: Vec<Arc<api::Reply>> = replies.into_iter().flatten().map(Arc::new).collect();
    if replies.len() != total {
        tracing::warn!(
            dropped = total - replies.len(),
            "dropped null entries from a reply list"
        );
    }
    replies
}

impl Post {
    pub fn was_edited(&self) -> bool {
        self.modified_at.map_or(false, |m| m != self.created_at)
    }

    /// Replaces the reply list with the result of a re-fetch. Every write
    /// (followup, endorsement, flag, AI generation...) is followed by a full
    /// re-fetch of the post detail, so this is the only mutation.
    pub fn set_replies(&mut self, replies: Vec<Option<api::Reply>>) {
        self.replies = ingest(replies);
    }

    /// The answer/followup partition of the current reply list. Rebuilt on
    /// every call; there is no cached thread to invalidate.
    pub fn thread(&self) -> Thread {
        Thread::new(&self.replies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CourseId, PostId, Reply, ReplyId, Uuid};

    fn wire_reply(id: u128) -> Reply {
        Reply {
            id: ReplyId(Uuid::from_u128(id)),
            parent_reply_id: None,
            author: None,
            body: format!("reply {id}"),
            created_at: chrono::Utc::now(),
            edited_at: None,
            llm_generated: false,
            instructor_edited: false,
            replaced_by_instructor: false,
            endorsed: false,
            flagged: false,
            from_instructor: false,
            is_instructor_answer: false,
            edited_by: None,
        }
    }

    fn wire_post(replies: Vec<Option<Reply>>) -> api::Post {
        api::Post {
            id: PostId::stub(),
            course_id: CourseId::stub(),
            author: Some(String::from("Ada Lovelace")),
            title: String::from("why is my borrow checker sad"),
            body: String::from("it will not let me go"),
            created_at: chrono::Utc::now(),
            modified_at: None,
            pinned: false,
            upvotes: 0,
            tags: vec![String::from("general")],
            replies,
        }
    }

    #[test]
    fn null_replies_are_dropped_at_ingestion() {
        let post = Post::from(wire_post(vec![
            Some(wire_reply(1)),
            None,
            Some(wire_reply(2)),
            None,
        ]));
        let ids: Vec<ReplyId> = post.replies.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![ReplyId(Uuid::from_u128(1)), ReplyId(Uuid::from_u128(2))]);
    }

    #[test]
    fn set_replies_replaces_wholesale() {
        let mut post = Post::from(wire_post(vec![Some(wire_reply(1))]));
        post.set_replies(vec![Some(wire_reply(2)), Some(wire_reply(3))]);
        let ids: Vec<ReplyId> = post.replies.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![ReplyId(Uuid::from_u128(2)), ReplyId(Uuid::from_u128(3))]);
    }

    #[test]
    fn thread_partitions_the_current_replies() {
        let mut answer = wire_reply(1);
        answer.is_instructor_answer = true;
        answer.from_instructor = true;
        let mut followup = wire_reply(2);
        followup.parent_reply_id = Some(answer.id);
        let post = Post::from(wire_post(vec![Some(answer), None, Some(followup)]));

        let thread = post.thread();
        assert_eq!(
            thread.answer.as_ref().map(|a| a.id),
            Some(ReplyId(Uuid::from_u128(1)))
        );
        assert_eq!(thread.followups.len(), 1);
        assert_eq!(thread.followups[0].reply.id, ReplyId(Uuid::from_u128(2)));
    }

    #[test]
    fn modification_at_creation_is_not_an_edit() {
        let mut p = wire_post(vec![]);
        let t = p.created_at;
        p.modified_at = Some(t);
        assert!(!Post::from(p.clone()).was_edited());
        p.modified_at = Some(t + chrono::Duration::seconds(1));
        assert!(Post::from(p).was_edited());
    }
}
