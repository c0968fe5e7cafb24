#![doc = "Federation delivery seam and ownership-based routing."]

use async_trait::async_trait;
use vidfed_types::{CommentId, Video};

use crate::error::CommentError;
use crate::writer::SavedComment;

/// Which federation delivery a new comment takes. Exactly one applies to any
/// comment; the decision lives here so "never both" holds at a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryRoute {
    /// The video is hosted locally: this node is authoritative for the
    /// thread and fans the comment out to its own followers.
    LocalFollowers,
    /// The video is hosted elsewhere: forward the comment to the video's
    /// origin, which is responsible for any further fan-out.
    Origin,
}

impl DeliveryRoute {
    /// Resolves the route from the video's ownership flag, the sole routing
    /// decision variable.
    pub fn for_video(video: &Video) -> Self {
        if video.is_owned() {
            DeliveryRoute::LocalFollowers
        } else {
            DeliveryRoute::Origin
        }
    }
}

/// Trait for the federation collaborator: address generation plus the two
/// delivery paths. Delivery calls take the same transactional scope as the
/// comment write so federation bookkeeping commits atomically with it.
#[async_trait]
pub trait FederationDelivery: Send + Sync {
    /// Transactional scope shared with the storage backend.
    type Scope: Send + Sync;

    /// Globally resolvable address for a comment on a video. Deterministic
    /// given the video and the assigned identifier.
    fn comment_url(&self, video: &Video, id: CommentId) -> String;

    /// Announces a new comment on a locally-owned video to this node's
    /// followers.
    async fn send_to_video_followers(
        &self,
        comment: &SavedComment,
        scope: &Self::Scope,
    ) -> Result<(), CommentError>;

    /// Forwards a new comment on a remote video to the video's origin node.
    async fn send_to_origin(
        &self,
        comment: &SavedComment,
        scope: &Self::Scope,
    ) -> Result<(), CommentError>;
}
