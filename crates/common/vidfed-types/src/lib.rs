// src/lib.rs for vidfed-types

pub mod comment;
pub mod ids;
pub mod list;
pub mod video;

pub use comment::{Comment, FormattedComment, NewComment};
pub use ids::{AccountId, CommentId, VideoId};
pub use list::ResultList;
pub use video::Video;
