use uuid::Uuid;

use crate::STUB_UUID;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub fn stub() -> CourseId {
        CourseId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub name: String,
    pub term: String,
}
