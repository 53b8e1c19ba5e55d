//! # External Collaborators
//!
//! Everything a command delegates to sits behind one of these traits and
//! arrives through `CommandContext`. The default implementations are enough
//! to run the bot on their own; a larger deployment can swap any of them.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod activity;
pub mod gateway;
pub mod nickname;
pub mod voice_forum;

use anyhow::Result;
use async_trait::async_trait;

use crate::interaction::{InteractionSession, InvokingUser, MemberInfo};
use crate::ui::NicknameAction;

pub use activity::JsonActivityTracker;
pub use gateway::{ChannelGateway, ResolvedChannel, SerenityGateway};
pub use nickname::{apply_prefix, SerenityNicknameManager};
pub use voice_forum::{ModalRecruitment, RoleGatedVoiceForum};

/// Special recruitment flows selectable by the `type` option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecruitmentKind {
    LongTerm,
    Scrimmage,
}

impl RecruitmentKind {
    /// `1` = long-term, `2` = scrimmage
    pub fn from_option(value: i64) -> Option<Self> {
        match value {
            1 => Some(RecruitmentKind::LongTerm),
            2 => Some(RecruitmentKind::Scrimmage),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecruitmentKind::LongTerm => "long_term",
            RecruitmentKind::Scrimmage => "scrimmage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "long_term" => Some(RecruitmentKind::LongTerm),
            "scrimmage" => Some(RecruitmentKind::Scrimmage),
            _ => None,
        }
    }
}

/// Voice-forum feature gate and the standalone recruitment entry point
#[async_trait]
pub trait VoiceForumService: Send + Sync {
    /// Pure policy check; no side effects
    fn has_recruitment_permission(&self, user: &InvokingUser, member: Option<&MemberInfo>) -> bool;

    /// Answer the interaction with the general recruitment modal
    async fn show_standalone_recruitment_modal(&self, session: &mut InteractionSession)
        -> Result<()>;

    fn recruitment_service(&self) -> &dyn RecruitmentService;
}

#[async_trait]
pub trait RecruitmentService: Send + Sync {
    async fn handle_special_recruitment_button(
        &self,
        session: &mut InteractionSession,
        kind: RecruitmentKind,
    ) -> Result<()>;

    /// A recruitment modal was submitted
    async fn handle_recruitment_submission(&self, session: &mut InteractionSession) -> Result<()>;
}

#[async_trait]
pub trait ActivityTracker: Send + Sync {
    async fn save_activity_data(&self) -> Result<()>;
    async fn clear_and_reinitialize_activity_data(&self) -> Result<()>;
}

/// One nickname-tag button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameRequest {
    pub guild_id: u64,
    pub user_id: u64,
    /// Current guild nickname, or the username when none is set
    pub current_name: String,
    /// Channel the panel was posted for
    pub channel_id: u64,
    pub action: NicknameAction,
}

#[async_trait]
pub trait VoiceChannelManager: Send + Sync {
    /// Apply the action and return the resulting nickname
    async fn apply_nickname_action(&self, request: &NicknameRequest) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recruitment_kind_from_option() {
        assert_eq!(RecruitmentKind::from_option(1), Some(RecruitmentKind::LongTerm));
        assert_eq!(RecruitmentKind::from_option(2), Some(RecruitmentKind::Scrimmage));
        assert_eq!(RecruitmentKind::from_option(0), None);
        assert_eq!(RecruitmentKind::from_option(3), None);
    }

    #[test]
    fn test_recruitment_kind_names_round_trip() {
        for kind in [RecruitmentKind::LongTerm, RecruitmentKind::Scrimmage] {
            assert_eq!(RecruitmentKind::parse(kind.as_str()), Some(kind));
        }
    }
}
