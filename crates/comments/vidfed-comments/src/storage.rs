#![doc = "Defines the CommentStore trait for pluggable storage backends."]

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use vidfed_types::{Comment, CommentId, NewComment, ResultList};

use crate::error::CommentError;

/// Options for a comment insert.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateOptions {
    /// When false, field validation is skipped. Used for the initial write,
    /// whose address is still a placeholder (the real address needs the
    /// assigned identifier).
    pub validate: bool,
}

/// Trait for transactional storage of comment records.
///
/// Every operation takes the caller's transactional scope so the whole
/// create-then-patch sequence commits atomically, or not at all. Atomicity
/// and isolation (at least read-committed) are the scope's responsibility;
/// implementations must not commit internally.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Caller-provided transactional scope all operations execute within.
    type Scope: Send + Sync;

    /// Inserts a new comment and returns the assigned identifier.
    async fn create(
        &self,
        draft: &NewComment,
        opts: CreateOptions,
        scope: &Self::Scope,
    ) -> Result<CommentId, CommentError>;

    /// Replaces the address of an already-inserted comment, within the same
    /// transactional scope as its insert.
    async fn set_url(
        &self,
        id: CommentId,
        url: &str,
        scope: &Self::Scope,
    ) -> Result<(), CommentError>;

    /// Lists every comment of the thread rooted at `root`, sorted by
    /// identifier ascending (root first). This is the batch shape
    /// [`crate::build_tree`] requires.
    async fn list_thread(
        &self,
        root: CommentId,
        scope: &Self::Scope,
    ) -> Result<ResultList<Comment>, CommentError>;
}

/// An in-memory implementation of `CommentStore` for testing and prototyping.
///
/// Its scope type is `()`: there is no transaction to speak of, writes apply
/// immediately.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    comments: HashMap<CommentId, Comment>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Default::default()
    }

    /// Fetch a single comment by id.
    pub async fn get(&self, id: CommentId) -> Option<Comment> {
        let inner = self.inner.read().await;
        inner.comments.get(&id).cloned()
    }
}

#[async_trait]
impl CommentStore for InMemoryStore {
    type Scope = ();

    async fn create(
        &self,
        draft: &NewComment,
        opts: CreateOptions,
        _scope: &(),
    ) -> Result<CommentId, CommentError> {
        if opts.validate && draft.text.trim().is_empty() {
            return Err(CommentError::InvalidInput(
                "comment text must not be empty".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = CommentId(inner.next_id);
        inner.comments.insert(
            id,
            Comment {
                id,
                url: draft.url.clone(),
                text: draft.text.clone(),
                origin_comment_id: draft.origin_comment_id,
                in_reply_to_comment_id: draft.in_reply_to_comment_id,
                video_id: draft.video_id,
                account_id: draft.account_id,
                created_at: draft.created_at,
            },
        );
        Ok(id)
    }

    async fn set_url(&self, id: CommentId, url: &str, _scope: &()) -> Result<(), CommentError> {
        let mut inner = self.inner.write().await;
        match inner.comments.get_mut(&id) {
            Some(comment) => {
                comment.url = url.to_string();
                Ok(())
            }
            None => Err(CommentError::Storage(format!(
                "cannot set url, comment {} does not exist",
                id
            ))),
        }
    }

    async fn list_thread(
        &self,
        root: CommentId,
        _scope: &(),
    ) -> Result<ResultList<Comment>, CommentError> {
        let inner = self.inner.read().await;
        let mut data: Vec<Comment> = inner
            .comments
            .values()
            .filter(|c| c.id == root || c.origin_comment_id == Some(root))
            .cloned()
            .collect();
        data.sort_by_key(|c| c.id);
        Ok(ResultList::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vidfed_types::{AccountId, VideoId};

    fn draft(text: &str) -> NewComment {
        NewComment {
            text: text.to_string(),
            url: "urn:vidfed:comment:pending".to_string(),
            origin_comment_id: None,
            in_reply_to_comment_id: None,
            video_id: VideoId(1),
            account_id: AccountId(1),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_skips_validation_when_asked() {
        let store = InMemoryStore::new();
        // Placeholder writes pass validate: false and must go through even
        // with an empty body.
        let id = store
            .create(&draft(""), CreateOptions { validate: false }, &())
            .await
            .unwrap();
        assert_eq!(id, CommentId(1));
    }

    #[tokio::test]
    async fn create_rejects_empty_text_when_validating() {
        let store = InMemoryStore::new();
        let err = store
            .create(&draft("  "), CreateOptions { validate: true }, &())
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn set_url_on_unknown_comment_is_a_storage_error() {
        let store = InMemoryStore::new();
        let err = store
            .set_url(CommentId(99), "https://vid.example/c/99", &())
            .await
            .unwrap_err();
        assert!(matches!(err, CommentError::Storage(_)));
    }

    #[tokio::test]
    async fn assigned_identifiers_are_ascending() {
        let store = InMemoryStore::new();
        let first = store.create(&draft("a"), Default::default(), &()).await.unwrap();
        let second = store.create(&draft("b"), Default::default(), &()).await.unwrap();
        assert!(second > first);
    }
}
