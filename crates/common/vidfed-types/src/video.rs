use serde::{Deserialize, Serialize};

use crate::ids::VideoId;

/// A video whose comment thread is being written to. Read-only to the
/// comment core; only the ownership flag drives any decision here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Video {
    pub id: VideoId,
    /// Stable public identifier used in comment addresses.
    pub uuid: String,
    /// Whether this node authoritatively hosts the video (and therefore its
    /// comment thread), as opposed to mirroring a remote origin.
    pub local: bool,
}

impl Video {
    /// True when this node is the origin for the video's thread.
    pub fn is_owned(&self) -> bool {
        self.local
    }
}
