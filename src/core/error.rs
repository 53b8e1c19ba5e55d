//! Command-layer error taxonomy
//!
//! Every failure inside a command ends up as a [`CommandError`] and is turned
//! into exactly one [`Notice`] at the pipeline boundary. Internal detail stays
//! in the logs.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::time::Duration;
use thiserror::Error;

use super::messages::Notice;

/// Acknowledgment state names, used in protocol error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckPhase {
    Unacknowledged,
    Deferred,
    Responded,
}

impl std::fmt::Display for AckPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AckPhase::Unacknowledged => "unacknowledged",
            AckPhase::Deferred => "deferred",
            AckPhase::Responded => "responded",
        };
        f.write_str(name)
    }
}

/// Misuse of the acknowledgment protocol. Programmer error, never user input.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("interaction already acknowledged (state: {0})")]
    AlreadyAcknowledged(AckPhase),
    #[error("interaction already has a terminal response")]
    AlreadyResponded,
    #[error("follow-up requires a deferred or responded interaction (state: {0})")]
    NotAcknowledged(AckPhase),
    #[error("a modal must be the first response (state: {0})")]
    ModalAfterAcknowledge(AckPhase),
    #[error("interaction expired after {0:?} while {1}")]
    Expired(Duration, AckPhase),
    #[error("platform rejected the response: {0}")]
    Platform(#[source] anyhow::Error),
}

/// What kind of referenced value failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Channel,
    RecruitmentType,
}

/// Which permission check failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The invoking user may not use the feature at all
    Feature,
    /// The bot lacks a capability on the named channel
    Channel { name: String },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid {kind:?} reference '{value}'")]
    InvalidResource { kind: ResourceKind, value: String },
    #[error("permission denied: {0:?}")]
    PermissionDenied(Denial),
    #[error("delegated service failed")]
    DelegateFailure {
        notice: Notice,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("unexpected failure")]
    Unexpected(#[source] anyhow::Error),
}

impl CommandError {
    pub fn invalid(kind: ResourceKind, value: impl Into<String>) -> Self {
        CommandError::InvalidResource {
            kind,
            value: value.into(),
        }
    }

    /// Service failure shown to the user as the generic failure notice
    pub fn delegate(source: anyhow::Error) -> Self {
        CommandError::DelegateFailure {
            notice: Notice::GenericFailure,
            source,
        }
    }

    /// Service failure with a command-specific (but still detail-free) notice
    pub fn delegate_with(notice: Notice, source: anyhow::Error) -> Self {
        CommandError::DelegateFailure { notice, source }
    }

    /// The single user-facing notice for this error
    pub fn notice(&self) -> Notice {
        match self {
            CommandError::InvalidResource {
                kind: ResourceKind::Channel,
                ..
            } => Notice::InvalidChannel,
            CommandError::InvalidResource {
                kind: ResourceKind::RecruitmentType,
                ..
            } => Notice::InvalidRecruitmentType,
            CommandError::PermissionDenied(Denial::Feature) => Notice::FeatureDenied,
            CommandError::PermissionDenied(Denial::Channel { name }) => {
                Notice::ChannelPermissionDenied {
                    channel: name.clone(),
                }
            }
            CommandError::DelegateFailure { notice, .. } => notice.clone(),
            CommandError::Protocol(_) | CommandError::Unexpected(_) => Notice::GenericFailure,
        }
    }

    /// Expected denials are logged at warn level, everything else at error level
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            CommandError::InvalidResource { .. } | CommandError::PermissionDenied(_)
        )
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        CommandError::Unexpected(err)
    }
}
