use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, CommentId, VideoId};

/// A persisted comment in a federated video discussion thread.
///
/// `origin_comment_id` always points at the thread root, never at an
/// intermediate ancestor: `None` iff this comment IS the root.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Comment {
    /// Storage-assigned identifier.
    pub id: CommentId,
    /// Globally resolvable address of this comment, derived from its id.
    pub url: String,
    /// Text body.
    pub text: String,
    /// Identifier of the thread root; `None` if this comment is the root.
    pub origin_comment_id: Option<CommentId>,
    /// Identifier of the immediate parent; `None` if this comment is the root.
    pub in_reply_to_comment_id: Option<CommentId>,
    /// Owning video.
    pub video_id: VideoId,
    /// Authoring account.
    pub account_id: AccountId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Identifier of the thread this comment belongs to (its own id when it
    /// is the root).
    pub fn thread_id(&self) -> CommentId {
        match self.origin_comment_id {
            Some(origin) => origin,
            None => self.id,
        }
    }

    /// Client-facing view of this comment.
    pub fn to_formatted(&self) -> FormattedComment {
        FormattedComment {
            id: self.id,
            url: self.url.clone(),
            text: self.text.clone(),
            thread_id: self.thread_id(),
            in_reply_to_comment_id: self.in_reply_to_comment_id,
            video_id: self.video_id,
            created_at: self.created_at,
        }
    }
}

/// A comment record before persistence: no identifier yet, and the address
/// is still a placeholder because it depends on the assigned identifier.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewComment {
    pub text: String,
    pub url: String,
    pub origin_comment_id: Option<CommentId>,
    pub in_reply_to_comment_id: Option<CommentId>,
    pub video_id: VideoId,
    pub account_id: AccountId,
    pub created_at: DateTime<Utc>,
}

/// Serialized, client-facing view of a comment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormattedComment {
    pub id: CommentId,
    pub url: String,
    pub text: String,
    /// Root of the thread this comment belongs to (own id for roots).
    pub thread_id: CommentId,
    pub in_reply_to_comment_id: Option<CommentId>,
    pub video_id: VideoId,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, origin: Option<i64>, parent: Option<i64>) -> Comment {
        Comment {
            id: CommentId(id),
            url: format!("https://vid.example/videos/watch/abc/comments/{}", id),
            text: "hi".to_string(),
            origin_comment_id: origin.map(CommentId),
            in_reply_to_comment_id: parent.map(CommentId),
            video_id: VideoId(7),
            account_id: AccountId(3),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn thread_id_of_root_is_own_id() {
        assert_eq!(comment(1, None, None).thread_id(), CommentId(1));
    }

    #[test]
    fn thread_id_of_reply_is_origin() {
        assert_eq!(comment(9, Some(1), Some(4)).thread_id(), CommentId(1));
    }

    #[test]
    fn formatted_view_serializes_ids_transparently() {
        let json = serde_json::to_value(comment(2, Some(1), Some(1)).to_formatted()).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["thread_id"], 1);
        assert_eq!(json["in_reply_to_comment_id"], 1);
    }
}
