//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and startup so clients can bubble
//! them up with consistent context. Rule violations are not errors; they come
//! back as [`pet_core::Outcome::Skipped`].
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("failed to load content pack: {0}")]
    Content(String),
}
