//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::sync::Arc;

use crate::services::{ActivityTracker, ChannelGateway, VoiceChannelManager, VoiceForumService};

/// Collaborators available to every command
///
/// Built once per interaction by the event handler; handlers never reach
/// for global state.
#[derive(Clone)]
pub struct CommandContext {
    pub gateway: Arc<dyn ChannelGateway>,
    pub voice_forum: Arc<dyn VoiceForumService>,
    pub activity_tracker: Arc<dyn ActivityTracker>,
    pub voice_channels: Arc<dyn VoiceChannelManager>,
}

impl CommandContext {
    pub fn new(
        gateway: Arc<dyn ChannelGateway>,
        voice_forum: Arc<dyn VoiceForumService>,
        activity_tracker: Arc<dyn ActivityTracker>,
        voice_channels: Arc<dyn VoiceChannelManager>,
    ) -> Self {
        Self {
            gateway,
            voice_forum,
            activity_tracker,
            voice_channels,
        }
    }
}
