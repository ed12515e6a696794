mod course;
pub use course::{Course, CourseId};

mod error;
pub use error::Error;

mod post;
pub use post::{Post, PostId};

mod reply;
pub use reply::{NewReply, Reply, ReplyId};

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

/// The backend stores user-supplied text in TEXT columns, which reject
/// null bytes; strings headed there are checked before the write goes out.
pub fn validate_string(s: &str) -> Result<(), Error> {
    match s.contains('\0') {
        true => Err(Error::NullByteInString(String::from(s))),
        false => Ok(()),
    }
}
