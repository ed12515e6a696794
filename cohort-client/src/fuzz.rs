#![cfg(test)]

use std::{collections::HashSet, sync::Arc};

use crate::{
    api::{Reply, ReplyId, Uuid},
    DisplayType, ReplyExt, Thread,
};

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
struct FuzzReply {
    reply: Reply,
    /// Index of the parent in the generated list, `None` for top-level.
    parent: Option<usize>,
}

/// Rewrites ids to the list index and parent links to earlier entries only,
/// so that every parent resolves and no cycle can occur. Orphans and
/// self-parents are covered by the unit tests in `thread.rs`.
fn materialize(list: Vec<FuzzReply>) -> Vec<Arc<Reply>> {
    list.into_iter()
        .enumerate()
        .map(|(i, f)| {
            let mut r = f.reply;
            r.id = ReplyId(Uuid::from_u128(i as u128));
            r.parent_reply_id = f
                .parent
                .filter(|_| i > 0)
                .map(|p| ReplyId(Uuid::from_u128((p % i) as u128)));
            Arc::new(r)
        })
        .collect()
}

#[test]
fn fuzz_thread_loses_no_reply() {
    bolero::check!()
        .with_type::<Vec<FuzzReply>>()
        .cloned()
        .for_each(|list| {
            let replies = materialize(list);
            let thread = Thread::new(&replies);

            let answer_id = thread.answer.as_ref().map(|a| a.id);
            let in_forest: Vec<ReplyId> = thread
                .followups
                .iter()
                .flat_map(|n| n.walk().into_iter().map(|(_, r)| r.id))
                .collect();
            let excluded: HashSet<ReplyId> = replies
                .iter()
                .filter(|r| Some(r.id) == answer_id || r.replaced_by_instructor)
                .map(|r| r.id)
                .collect();

            for r in &replies {
                let count = in_forest.iter().filter(|id| **id == r.id).count();
                match excluded.contains(&r.id) {
                    true => assert_eq!(count, 0, "excluded reply {:?} in forest", r.id),
                    false => assert_eq!(count, 1, "reply {:?} should appear once", r.id),
                }
            }
        })
}

#[test]
fn fuzz_forest_adjacency_matches_parent_links() {
    bolero::check!()
        .with_type::<Vec<FuzzReply>>()
        .cloned()
        .for_each(|list| {
            let replies = materialize(list);
            let thread = Thread::new(&replies);

            let answer_id = thread.answer.as_ref().map(|a| a.id);
            let excluded: HashSet<ReplyId> = replies
                .iter()
                .filter(|r| Some(r.id) == answer_id || r.replaced_by_instructor)
                .map(|r| r.id)
                .collect();

            fn check(node: &crate::ReplyNode) {
                for child in &node.children {
                    assert_eq!(child.reply.parent_reply_id, Some(node.reply.id));
                    check(child);
                }
            }
            for root in &thread.followups {
                check(root);
                // roots are top-level or point at a reply the partition removed
                match root.reply.parent_reply_id {
                    None => (),
                    Some(parent) => assert!(
                        excluded.contains(&parent),
                        "root {:?} has a live parent {:?}",
                        root.reply.id,
                        parent
                    ),
                }
            }
        })
}

#[test]
fn fuzz_classification_priority_holds() {
    bolero::check!().with_type::<Reply>().cloned().for_each(|r| {
        let d = r.display_type();
        if r.replaced_by_instructor || r.is_instructor_answer {
            assert_eq!(d, DisplayType::InstructorAnswer);
        } else if r.llm_generated {
            match (r.instructor_edited, r.endorsed) {
                (true, _) => assert_eq!(d, DisplayType::InstructorEditedAi),
                (false, true) => assert_eq!(d, DisplayType::AiEndorsed),
                (false, false) => assert_eq!(d, DisplayType::Ai),
            }
            assert_eq!(r.author_label(), "AI Tutor");
        } else if r.from_instructor {
            assert_eq!(d, DisplayType::InstructorFollowup);
        } else {
            assert_eq!(d, DisplayType::Student);
        }
    })
}
