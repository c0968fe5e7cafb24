#![doc = "Orchestrates comment persistence and federation dispatch."]

//! Module for creating comments inside a caller-supplied transactional scope.

use std::sync::Arc;

use chrono::Utc;
use vidfed_types::{AccountId, Comment, NewComment, Video};

use crate::error::CommentError;
use crate::federation::{DeliveryRoute, FederationDelivery};
use crate::storage::{CommentStore, CreateOptions};

/// Address written on the initial insert, before the identifier (and thus
/// the real address) exists.
const URL_PLACEHOLDER: &str = "urn:vidfed:comment:pending";

/// Request to create one comment.
#[derive(Debug)]
pub struct CreateComment<'a> {
    /// Text body.
    pub text: String,
    /// Persisted parent comment, if this is a reply. `None` starts a new
    /// thread. Accepting only a persisted [`Comment`] here is what makes
    /// "reply to an unsaved parent" unrepresentable.
    pub in_reply_to: Option<&'a Comment>,
    /// Target video; must already exist.
    pub video: &'a Video,
    /// Authoring account.
    pub account_id: AccountId,
}

/// The persisted comment plus the in-memory parent and video it was created
/// against, attached as a convenience for the caller (not re-fetched from
/// storage).
#[derive(Debug, Clone, PartialEq)]
pub struct SavedComment {
    /// The persisted record, with its final address.
    pub comment: Comment,
    /// The parent this reply was attached to, if any.
    pub in_reply_to: Option<Comment>,
    /// The video the comment was written against.
    pub video: Video,
}

/// Creates comments: persists the record, patches in the address once the
/// identifier exists, and dispatches exactly one federation delivery. All
/// storage and federation calls share the caller's transactional scope; this
/// writer performs no retries and no rollback of its own.
#[derive(Debug)]
pub struct CommentWriter<S, F> {
    store: Arc<S>,
    federation: Arc<F>,
}

impl<S, F> CommentWriter<S, F>
where
    S: CommentStore,
    F: FederationDelivery<Scope = S::Scope>,
{
    /// Creates a new writer over the given collaborators.
    pub fn new(store: Arc<S>, federation: Arc<F>) -> Self {
        Self { store, federation }
    }

    /// Persists a new comment and triggers its federation delivery.
    ///
    /// Side effects: one storage insert, one storage update, one federation
    /// dispatch. Storage and federation failures propagate unmodified; the
    /// caller decides rollback via its scope.
    #[tracing::instrument(level = "info", skip_all, fields(video_id = %req.video.id, account_id = %req.account_id))]
    pub async fn create_comment(
        &self,
        req: CreateComment<'_>,
        scope: &S::Scope,
    ) -> Result<SavedComment, CommentError> {
        // A reply's origin is always the thread's single root: the parent's
        // own origin when the parent is itself a reply, otherwise the parent
        // itself. Explicit match, so an id of 0 is not special.
        let origin_comment_id = req.in_reply_to.map(|parent| match parent.origin_comment_id {
            Some(origin) => origin,
            None => parent.id,
        });

        let draft = NewComment {
            text: req.text,
            url: URL_PLACEHOLDER.to_string(),
            origin_comment_id,
            in_reply_to_comment_id: req.in_reply_to.map(|parent| parent.id),
            video_id: req.video.id,
            account_id: req.account_id,
            created_at: Utc::now(),
        };

        // The address depends on the assigned identifier, so the first write
        // carries a placeholder and skips validation; the real address is
        // patched in right after, still inside the caller's scope.
        let id = self
            .store
            .create(&draft, CreateOptions { validate: false }, scope)
            .await?;
        let url = self.federation.comment_url(req.video, id);
        self.store.set_url(id, &url, scope).await?;
        tracing::debug!(comment_id = %id, url = %url, "comment persisted");

        let saved = SavedComment {
            comment: Comment {
                id,
                url,
                text: draft.text,
                origin_comment_id: draft.origin_comment_id,
                in_reply_to_comment_id: draft.in_reply_to_comment_id,
                video_id: draft.video_id,
                account_id: draft.account_id,
                created_at: draft.created_at,
            },
            in_reply_to: req.in_reply_to.cloned(),
            video: req.video.clone(),
        };

        match DeliveryRoute::for_video(req.video) {
            DeliveryRoute::LocalFollowers => {
                self.federation
                    .send_to_video_followers(&saved, scope)
                    .await?
            }
            DeliveryRoute::Origin => self.federation.send_to_origin(&saved, scope).await?,
        }

        Ok(saved)
    }
}
