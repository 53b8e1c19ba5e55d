//! Interaction acknowledgment protocol
//!
//! Discord expects exactly one initial response per interaction, within
//! [`ACK_WINDOW`] of receipt. Deferring buys time until [`TOKEN_LIFETIME`],
//! after which the placeholder must be edited. [`InteractionSession`] tracks
//! where an interaction is in that lifecycle and turns every response request
//! into the one platform call that is legal from there.
//!
//! State only moves forward:
//!
//! ```text
//! Unacknowledged ──defer──▶ Deferred ──respond──▶ Responded
//!        └─────────────respond / modal────────────────▲
//! ```
//!
//! A second terminal response is rejected with
//! [`ProtocolError::AlreadyResponded`] and nothing is sent.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use log::debug;
use std::time::Duration;
use tokio::time::Instant;

use super::invocation::Invocation;
use super::responder::InteractionResponder;
use crate::core::{AckPhase, Modal, ProtocolError, Reply};

/// Time allowed for the first response
pub const ACK_WINDOW: Duration = Duration::from_secs(3);
/// Lifetime of the interaction token for edits and follow-ups
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckState {
    Unacknowledged,
    Deferred { ephemeral: bool },
    Responded,
}

impl AckState {
    pub fn phase(&self) -> AckPhase {
        match self {
            AckState::Unacknowledged => AckPhase::Unacknowledged,
            AckState::Deferred { .. } => AckPhase::Deferred,
            AckState::Responded => AckPhase::Responded,
        }
    }
}

/// How a command acknowledges before doing its work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckMode {
    /// Signal "thinking" right away; use when the work touches the network
    Defer { ephemeral: bool },
    /// Answer directly (required when the answer is a modal)
    None,
}

pub struct InteractionSession {
    invocation: Invocation,
    responder: Box<dyn InteractionResponder>,
    state: AckState,
    received_at: Instant,
}

impl InteractionSession {
    pub fn new(invocation: Invocation, responder: Box<dyn InteractionResponder>) -> Self {
        Self {
            invocation,
            responder,
            state: AckState::Unacknowledged,
            received_at: Instant::now(),
        }
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn state(&self) -> AckState {
        self.state
    }

    pub fn is_responded(&self) -> bool {
        self.state == AckState::Responded
    }

    pub async fn acknowledge(&mut self, mode: AckMode) -> Result<(), ProtocolError> {
        if self.state != AckState::Unacknowledged {
            return Err(ProtocolError::AlreadyAcknowledged(self.state.phase()));
        }
        self.check_window()?;

        if let AckMode::Defer { ephemeral } = mode {
            self.responder
                .defer(ephemeral)
                .await
                .map_err(ProtocolError::Platform)?;
            self.state = AckState::Deferred { ephemeral };
            debug!(
                "[{}] Deferred '{}' (ephemeral: {ephemeral})",
                self.invocation.request_id, self.invocation.name
            );
        }
        Ok(())
    }

    /// Send the terminal response: an edit after a defer, a direct reply otherwise
    pub async fn respond(&mut self, reply: Reply) -> Result<(), ProtocolError> {
        self.check_window()?;

        let sent = match self.state {
            AckState::Responded => return Err(ProtocolError::AlreadyResponded),
            AckState::Deferred { .. } => self.responder.edit_response(&reply).await,
            AckState::Unacknowledged => self.responder.create_response(&reply).await,
        };
        sent.map_err(ProtocolError::Platform)?;

        self.state = AckState::Responded;
        Ok(())
    }

    /// Terminal response in modal form; only legal before any acknowledgment
    pub async fn present_modal(&mut self, modal: Modal) -> Result<(), ProtocolError> {
        if self.state != AckState::Unacknowledged {
            return Err(ProtocolError::ModalAfterAcknowledge(self.state.phase()));
        }
        self.check_window()?;

        self.responder
            .present_modal(&modal)
            .await
            .map_err(ProtocolError::Platform)?;
        self.state = AckState::Responded;
        Ok(())
    }

    /// Extra visible message after the interaction has been acknowledged
    pub async fn respond_additional(&mut self, reply: Reply) -> Result<(), ProtocolError> {
        if self.state == AckState::Unacknowledged {
            return Err(ProtocolError::NotAcknowledged(self.state.phase()));
        }
        self.check_window()?;

        self.responder
            .create_followup(&reply)
            .await
            .map_err(ProtocolError::Platform)
    }

    fn check_window(&self) -> Result<(), ProtocolError> {
        let elapsed = self.received_at.elapsed();
        let limit = match self.state {
            AckState::Unacknowledged => ACK_WINDOW,
            AckState::Deferred { .. } | AckState::Responded => TOKEN_LIFETIME,
        };
        if elapsed > limit {
            return Err(ProtocolError::Expired(elapsed, self.state.phase()));
        }
        Ok(())
    }
}
