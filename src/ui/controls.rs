//! # Control Identifiers
//!
//! Buttons carry their routing in the custom id: a registered action prefix
//! followed by the target channel id. A later button press is routed from the
//! id alone, so no session state is held between the panel post and the click.
//!
//! Modals use the same idea with [`RECRUITMENT_MODAL_PREFIX`] and a form key.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::ControlStyle;
use crate::services::RecruitmentKind;

/// Button ID prefixes for routing
pub const NICKNAME_WAIT_PREFIX: &str = "nickname_wait_";
pub const NICKNAME_SPECTATE_PREFIX: &str = "nickname_spectate_";
pub const NICKNAME_RESET_PREFIX: &str = "nickname_reset_";

/// Modal ID prefix for recruitment forms
pub const RECRUITMENT_MODAL_PREFIX: &str = "recruitment_modal_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NicknameAction {
    Waiting,
    Spectating,
    Reset,
}

impl NicknameAction {
    pub const ALL: [NicknameAction; 3] = [
        NicknameAction::Waiting,
        NicknameAction::Spectating,
        NicknameAction::Reset,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            NicknameAction::Waiting => NICKNAME_WAIT_PREFIX,
            NicknameAction::Spectating => NICKNAME_SPECTATE_PREFIX,
            NicknameAction::Reset => NICKNAME_RESET_PREFIX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NicknameAction::Waiting => "⏳ 대기",
            NicknameAction::Spectating => "👀 관전",
            NicknameAction::Reset => "🔄 초기화",
        }
    }

    /// Nickname tag this action toggles; `Reset` strips every tag
    pub fn tag(self) -> Option<&'static str> {
        match self {
            NicknameAction::Waiting => Some("[대기]"),
            NicknameAction::Spectating => Some("[관전]"),
            NicknameAction::Reset => None,
        }
    }

    pub fn style(self) -> ControlStyle {
        match self {
            NicknameAction::Waiting => ControlStyle::Primary,
            NicknameAction::Spectating => ControlStyle::Success,
            NicknameAction::Reset => ControlStyle::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlIdError {
    #[error("no registered prefix matches '{0}'")]
    UnknownPrefix(String),
    #[error("control '{0}' has no valid channel id")]
    InvalidTarget(String),
}

/// A routable button identifier: action + target channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlId {
    pub action: NicknameAction,
    pub channel_id: u64,
}

impl ControlId {
    pub fn new(action: NicknameAction, channel_id: u64) -> Self {
        Self { action, channel_id }
    }

    pub fn encode(&self) -> String {
        format!("{}{}", self.action.prefix(), self.channel_id)
    }

    pub fn parse(custom_id: &str) -> Result<Self, ControlIdError> {
        let (action, suffix) = NicknameAction::ALL
            .iter()
            .find_map(|action| {
                custom_id
                    .strip_prefix(action.prefix())
                    .map(|suffix| (*action, suffix))
            })
            .ok_or_else(|| ControlIdError::UnknownPrefix(custom_id.to_string()))?;

        // Only the canonical decimal form that `encode` produces is routable
        let canonical = suffix == "0" || !suffix.starts_with('0');
        if suffix.is_empty() || !canonical || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ControlIdError::InvalidTarget(custom_id.to_string()));
        }
        let channel_id = suffix
            .parse::<u64>()
            .map_err(|_| ControlIdError::InvalidTarget(custom_id.to_string()))?;

        Ok(Self { action, channel_id })
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ControlId {
    type Err = ControlIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Which recruitment form a modal submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecruitmentForm {
    General,
    Special(RecruitmentKind),
}

impl RecruitmentForm {
    pub fn key(self) -> &'static str {
        match self {
            RecruitmentForm::General => "general",
            RecruitmentForm::Special(kind) => kind.as_str(),
        }
    }

    pub fn modal_id(self) -> String {
        format!("{}{}", RECRUITMENT_MODAL_PREFIX, self.key())
    }

    pub fn from_modal_id(custom_id: &str) -> Option<Self> {
        match custom_id.strip_prefix(RECRUITMENT_MODAL_PREFIX)? {
            "general" => Some(RecruitmentForm::General),
            other => RecruitmentKind::parse(other).map(RecruitmentForm::Special),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_registered_prefix() {
        let id = ControlId::new(NicknameAction::Spectating, 123);
        assert_eq!(id.encode(), "nickname_spectate_123");
        assert_eq!(id.to_string(), id.encode());
    }

    #[test]
    fn test_parse_every_action() {
        for action in NicknameAction::ALL {
            let encoded = ControlId::new(action, 987654321).encode();
            assert_eq!(
                ControlId::parse(&encoded),
                Ok(ControlId::new(action, 987654321))
            );
        }
    }

    #[test]
    fn test_unknown_prefix_is_unroutable() {
        assert_eq!(
            ControlId::parse("nickname_dance_123"),
            Err(ControlIdError::UnknownPrefix("nickname_dance_123".into()))
        );
        assert!(matches!(
            "show_help_modal".parse::<ControlId>(),
            Err(ControlIdError::UnknownPrefix(_))
        ));
    }

    #[test]
    fn test_bad_target_is_rejected() {
        for id in ["nickname_wait_", "nickname_wait_abc", "nickname_reset_-5", "nickname_wait_1_2"] {
            assert!(
                matches!(ControlId::parse(id), Err(ControlIdError::InvalidTarget(_))),
                "{id} should be rejected"
            );
        }
        assert!(ControlId::parse("nickname_wait_99999999999999999999999").is_err());
    }

    #[test]
    fn test_leading_zero_target_is_rejected() {
        assert_eq!(
            ControlId::parse("nickname_wait_0123"),
            Err(ControlIdError::InvalidTarget("nickname_wait_0123".into()))
        );
        assert_eq!(
            ControlId::parse("nickname_wait_0"),
            Ok(ControlId::new(NicknameAction::Waiting, 0))
        );
    }

    #[test]
    fn test_prefixes_are_distinct() {
        let prefixes: Vec<_> = NicknameAction::ALL.iter().map(|a| a.prefix()).collect();
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert!(!a.starts_with(b) && !b.starts_with(a));
            }
        }
    }

    #[test]
    fn test_recruitment_form_ids() {
        let forms = [
            RecruitmentForm::General,
            RecruitmentForm::Special(RecruitmentKind::LongTerm),
            RecruitmentForm::Special(RecruitmentKind::Scrimmage),
        ];
        for form in forms {
            assert_eq!(RecruitmentForm::from_modal_id(&form.modal_id()), Some(form));
        }
        assert_eq!(RecruitmentForm::from_modal_id("recruitment_modal_party"), None);
        assert_eq!(RecruitmentForm::from_modal_id("help_feedback_modal"), None);
    }
}
