#![doc = "Pure reconstruction of a thread tree from a flat comment batch."]

use std::collections::HashMap;

use serde::Serialize;
use vidfed_types::{Comment, CommentId, FormattedComment};

use crate::error::CommentError;

/// One node of a reconstructed thread: the formatted view of a comment plus
/// its replies in discovery order. Built transiently, never persisted.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CommentTree {
    /// The comment at this node.
    pub comment: FormattedComment,
    /// Direct replies, in the order they appeared in the input batch.
    pub children: Vec<CommentTree>,
}

// Flat node held while the batch is consumed; children are arena slots.
struct Slot {
    comment: Comment,
    children: Vec<usize>,
}

/// Rebuilds the thread hierarchy from a flat batch of comments.
///
/// Contract on the input (enforced upstream, by the id-ascending query):
/// non-empty, sorted by identifier ascending, root first, every reply
/// strictly after its parent. Under that contract reconstruction is a single
/// linear pass: one arena push, one index insert and at most one index
/// lookup per comment. A reply whose parent has not been seen is a
/// data-integrity violation and fails with both identifiers; it is never
/// dropped or reattached elsewhere. No cycles are possible since every
/// lookup target has a strictly smaller identifier than its child.
pub fn build_tree(comments: Vec<Comment>) -> Result<CommentTree, CommentError> {
    let mut remaining = comments.into_iter();
    let root = remaining.next().ok_or(CommentError::EmptyThread)?;

    let mut index: HashMap<CommentId, usize> = HashMap::new();
    index.insert(root.id, 0);
    let mut arena = vec![Slot { comment: root, children: Vec::new() }];

    for comment in remaining {
        let parent = comment.in_reply_to_comment_id.ok_or_else(|| {
            CommentError::InvalidInput(format!(
                "comment {} has no parent but is not the thread root",
                comment.id
            ))
        })?;
        let parent_slot = *index
            .get(&parent)
            .ok_or(CommentError::ParentNotFound { child: comment.id, parent })?;

        let slot = arena.len();
        index.insert(comment.id, slot);
        arena.push(Slot { comment, children: Vec::new() });
        arena[parent_slot].children.push(slot);
    }

    assemble(arena)
}

// Children always occupy higher slots than their parent, so popping from the
// back builds every subtree before its parent asks for it.
fn assemble(mut arena: Vec<Slot>) -> Result<CommentTree, CommentError> {
    let mut built: HashMap<usize, CommentTree> = HashMap::with_capacity(arena.len());
    while let Some(slot) = arena.pop() {
        let children = slot
            .children
            .iter()
            .map(|child| {
                built.remove(child).ok_or_else(|| {
                    CommentError::InvalidInput(format!(
                        "Inconsistent state: tree slot {} missing during assembly",
                        child
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        built.insert(
            arena.len(),
            CommentTree { comment: slot.comment.to_formatted(), children },
        );
    }

    built
        .remove(&0)
        .ok_or(CommentError::EmptyThread)
}
