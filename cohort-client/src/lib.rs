mod db;
pub use db::DbDump;

mod fuzz;

mod post;
pub use post::Post;

mod reply;
pub use reply::{DisplayType, ReplyExt};

mod thread;
pub use thread::{build_tree, ReplyNode, Thread};

pub mod api {
    pub use cohort_api::*;
}

pub mod prelude {
    pub use crate::ReplyExt;
}
