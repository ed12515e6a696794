use std::{cmp::Reverse, collections::HashMap, sync::Arc};

use crate::{api, Post};

/// Everything the client has fetched so far.
///
/// Maps are `Arc`-wrapped so cloning a dump for a render pass is cheap; the
/// next fetch mutates through `Arc::make_mut`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DbDump {
    pub courses: Arc<HashMap<api::CourseId, api::Course>>,
    pub posts: Arc<HashMap<api::PostId, Arc<Post>>>,
}

impl DbDump {
    pub fn stub() -> DbDump {
        DbDump {
            courses: Arc::new(HashMap::new()),
            posts: Arc::new(HashMap::new()),
        }
    }

    pub fn add_courses(&mut self, courses: Vec<api::Course>) {
        Arc::make_mut(&mut self.courses).extend(courses.into_iter().map(|c| (c.id, c)));
    }

    pub fn add_posts(&mut self, posts: Vec<api::Post>) {
        Arc::make_mut(&mut self.posts)
            .extend(posts.into_iter().map(|p| (p.id, Arc::new(Post::from(p)))));
    }

    /// Replaces a post's reply list with the result of a re-fetch.
    pub fn set_replies(&mut self, post: api::PostId, replies: Vec<Option<api::Reply>>) {
        match Arc::make_mut(&mut self.posts).get_mut(&post) {
            Some(p) => Arc::make_mut(p).set_replies(replies),
            None => tracing::warn!(?post, "got replies for a post that was never fetched"),
        }
    }

    /// All fetched posts of a course, pinned posts first, then newest first,
    /// the way the dashboard lists them.
    pub fn posts_in(&self, course: api::CourseId) -> Vec<Arc<Post>> {
        let mut res: Vec<Arc<Post>> = self
            .posts
            .values()
            .filter(|p| p.course_id == course)
            .cloned()
            .collect();
        res.sort_unstable_by_key(|p| (Reverse(p.pinned), Reverse(p.created_at), p.id));
        res
    }
}
