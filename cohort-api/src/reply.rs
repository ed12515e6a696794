use uuid::Uuid;

use crate::{Error, Time, STUB_UUID};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct ReplyId(#[generator(bolero::generator::gen_arbitrary())] pub Uuid);

impl ReplyId {
    pub fn stub() -> ReplyId {
        ReplyId(STUB_UUID)
    }
}

/// One reply as the backend serializes it inside a post-detail payload.
///
/// The booleans overlap: a reply can be AI-generated, endorsed and
/// instructor-edited all at once. `cohort-client` resolves the bag into a
/// single display category; nothing else should branch on the raw flags.
#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: ReplyId,
    /// Reply this one responds to; absent for top-level replies.
    pub parent_reply_id: Option<ReplyId>,

    /// Display name of the human author; never set on AI-generated replies.
    pub author: Option<String>,
    pub body: String,

    #[generator(bolero::generator::gen_arbitrary())]
    pub created_at: Time,
    /// Present only if the reply was edited after creation.
    #[generator(bolero::generator::gen_arbitrary())]
    pub edited_at: Option<Time>,

    /// Originally produced by the AI tutor.
    pub llm_generated: bool,
    /// An instructor reworded the AI text without taking over authorship.
    pub instructor_edited: bool,
    /// An instructor's own answer fully superseded the AI reply.
    pub replaced_by_instructor: bool,
    pub endorsed: bool,
    /// Student-raised review flag; only meaningful on AI replies.
    pub flagged: bool,
    pub from_instructor: bool,
    /// The formal "Instructor's Answer" for the post, as opposed to a
    /// threaded instructor followup.
    pub is_instructor_answer: bool,
    /// Display name of whoever last edited or replaced the reply.
    pub edited_by: Option<String>,
}

/// Payload for posting a followup (or a threaded response to one).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    pub body: String,
    pub parent_reply_id: Option<ReplyId>,
}

impl NewReply {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_payload() {
        let r: Reply = serde_json::from_str(
            r#"{
                "id": "00000000-0000-0000-0000-000000000001",
                "parentReplyId": null,
                "author": "Grace Hopper",
                "body": "have you tried rebooting?",
                "createdAt": "2025-11-03T14:30:00Z",
                "editedAt": null,
                "llmGenerated": false,
                "instructorEdited": false,
                "replacedByInstructor": false,
                "endorsed": true,
                "flagged": false,
                "fromInstructor": true,
                "isInstructorAnswer": false,
                "editedBy": null
            }"#,
        )
        .expect("parsing reply payload");
        assert_eq!(r.id, ReplyId(crate::uuid!("00000000-0000-0000-0000-000000000001")));
        assert_eq!(r.author.as_deref(), Some("Grace Hopper"));
        assert!(r.from_instructor);
        assert!(r.endorsed);
        assert!(!r.llm_generated);
        assert_eq!(r.parent_reply_id, None);
    }

    #[test]
    fn new_reply_rejects_null_bytes() {
        let r = NewReply {
            body: String::from("oops\0"),
            parent_reply_id: None,
        };
        assert_eq!(
            r.validate(),
            Err(Error::NullByteInString(String::from("oops\0")))
        );
        let r = NewReply {
            body: String::from("fine"),
            parent_reply_id: Some(ReplyId::stub()),
        };
        assert_eq!(r.validate(), Ok(()));
    }
}
