use crate::api::Reply;

/// How a reply renders: badge, styling and author label all key off this.
///
/// Exactly one variant applies to any reply. The flat booleans on [`Reply`]
/// can overlap, so [`ReplyExt::display_type`] resolves them in a fixed
/// priority order; downstream code must branch on the variant and never
/// re-inspect the raw flags.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisplayType {
    /// The instructor's authored or promoted answer, even if it started out
    /// AI-generated.
    InstructorAnswer,
    /// AI content an instructor reworded but did not take over.
    InstructorEditedAi,
    /// Untouched AI content an instructor vetted.
    AiEndorsed,
    /// Unvetted, unedited AI content.
    Ai,
    /// A direct instructor reply in the discussion thread, distinct from
    /// the formal answer.
    InstructorFollowup,
    Student,
}

pub trait ReplyExt {
    fn display_type(&self) -> DisplayType;
    fn author_label(&self) -> &str;
}

impl ReplyExt for Reply {
    fn display_type(&self) -> DisplayType {
        // Replacement outranks editing, editing outranks endorsement,
        // endorsement outranks raw AI origin, AI origin outranks plain
        // authorship. First match wins.
        if self.replaced_by_instructor || self.is_instructor_answer {
            DisplayType::InstructorAnswer
        } else if self.llm_generated && self.instructor_edited {
            DisplayType::InstructorEditedAi
        } else if self.llm_generated && self.endorsed {
            DisplayType::AiEndorsed
        } else if self.llm_generated {
            DisplayType::Ai
        } else if self.from_instructor {
            DisplayType::InstructorFollowup
        } else {
            DisplayType::Student
        }
    }

    fn author_label(&self) -> &str {
        match self.display_type() {
            DisplayType::InstructorAnswer => self.edited_by.as_deref().unwrap_or("Instructor"),
            DisplayType::InstructorEditedAi | DisplayType::AiEndorsed | DisplayType::Ai => {
                "AI Tutor"
            }
            DisplayType::InstructorFollowup | DisplayType::Student => {
                self.author.as_deref().unwrap_or("Unknown")
            }
        }
    }
}
