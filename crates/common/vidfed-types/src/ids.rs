use serde::{Deserialize, Serialize};
use std::fmt;

/// Durable identifier of a persisted comment, assigned by storage.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CommentId(pub i64);

/// Identifier of a video.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VideoId(pub i64);

/// Identifier of an authoring account.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AccountId(pub i64);

macro_rules! impl_id_display {
    ($($id:ty),+) => {
        $(
            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<i64> for $id {
                fn from(raw: i64) -> Self {
                    Self(raw)
                }
            }
        )+
    };
}

impl_id_display!(CommentId, VideoId, AccountId);
