use std::{collections::HashMap, sync::Arc};

use crate::api::{Reply, ReplyId};

/// A reply plus its responses, children in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplyNode {
    pub reply: Arc<Reply>,
    pub children: Vec<ReplyNode>,
}

impl ReplyNode {
    /// Depth-first walk of this subtree, yielding each reply with its depth
    /// (0 for the node itself). The rendering layer maps depth to
    /// indentation.
    pub fn walk(&self) -> Vec<(usize, &Arc<Reply>)> {
        fn rec<'a>(node: &'a ReplyNode, depth: usize, out: &mut Vec<(usize, &'a Arc<Reply>)>) {
            out.push((depth, &node.reply));
            for child in &node.children {
                rec(child, depth + 1, out);
            }
        }
        let mut res = Vec::new();
        rec(self, 0, &mut res);
        res
    }
}

/// Builds the discussion forest for `replies`, preserving input order as
/// sibling order at every level.
///
/// A reply whose parent is not in `replies` becomes a root rather than being
/// dropped. A reply listing itself as its own parent is treated the same
/// way, as following that link would loop forever.
pub fn build_tree(replies: &[Arc<Reply>]) -> Vec<ReplyNode> {
    let index: HashMap<ReplyId, usize> = replies
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id, i))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); replies.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (i, r) in replies.iter().enumerate() {
        match r.parent_reply_id {
            Some(parent) if parent == r.id => {
                tracing::warn!(reply = ?r.id, "reply is its own parent, treating as top-level");
                roots.push(i);
            }
            Some(parent) => match index.get(&parent) {
                Some(&p) => children[p].push(i),
                None => {
                    tracing::warn!(
                        reply = ?r.id,
                        ?parent,
                        "parent is not in this reply list, treating as top-level"
                    );
                    roots.push(i);
                }
            },
            None => roots.push(i),
        }
    }

    fn assemble(i: usize, replies: &[Arc<Reply>], children: &[Vec<usize>]) -> ReplyNode {
        ReplyNode {
            reply: replies[i].clone(),
            children: children[i]
                .iter()
                .map(|&c| assemble(c, replies, children))
                .collect(),
        }
    }
    roots
        .into_iter()
        .map(|i| assemble(i, replies, &children))
        .collect()
}

/// The answer/followup partition of one post's reply list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Thread {
    /// The reply rendered in the dedicated answer section, if any.
    pub answer: Option<Arc<Reply>>,
    /// Discussion forest for everything else, roots in input order.
    pub followups: Vec<ReplyNode>,
}

impl Thread {
    /// Splits `replies` into the formal answer and the followup forest.
    ///
    /// The answer slot goes to the designated instructor answer, else the
    /// first direct instructor reply that is not AI-generated. Replies an
    /// instructor fully replaced also stay out of the followup thread:
    /// rendering them there too would show the same answer twice. A followup
    /// whose parent moved into the answer slot stays visible as a root.
    pub fn new(replies: &[Arc<Reply>]) -> Thread {
        let answer = replies
            .iter()
            .find(|r| r.is_instructor_answer)
            .or_else(|| {
                replies
                    .iter()
                    .find(|r| r.from_instructor && !r.llm_generated)
            })
            .cloned();
        let answer_id = answer.as_ref().map(|a| a.id);

        let followups: Vec<Arc<Reply>> = replies
            .iter()
            .filter(|r| Some(r.id) != answer_id && !r.replaced_by_instructor)
            .cloned()
            .collect();
        Thread {
            answer,
            followups: build_tree(&followups),
        }
    }
}
