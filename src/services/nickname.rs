//! Nickname tag toggling
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::http::Http;
use serenity::model::id::{GuildId, UserId};
use std::sync::Arc;

use super::{NicknameRequest, VoiceChannelManager};
use crate::ui::NicknameAction;

/// Discord nickname length limit (characters)
pub const NICKNAME_LIMIT: usize = 32;

/// Compute the nickname after pressing `action`.
///
/// Any known tag is stripped first. A tag action applies its tag unless the
/// name already carried that same tag, in which case the press toggles it off.
pub fn apply_prefix(current: &str, action: NicknameAction) -> String {
    let trimmed = current.trim();
    let existing = NicknameAction::ALL
        .iter()
        .filter_map(|a| a.tag().map(|tag| (*a, tag)))
        .find(|(_, tag)| trimmed.starts_with(tag));

    let base = match existing {
        Some((_, tag)) => trimmed[tag.len()..].trim_start(),
        None => trimmed,
    };

    let tag = match action.tag() {
        Some(tag) if existing.map(|(a, _)| a) != Some(action) => tag,
        _ => return base.to_string(),
    };

    let tagged = format!("{tag} {base}");
    tagged.chars().take(NICKNAME_LIMIT).collect()
}

pub struct SerenityNicknameManager {
    http: Arc<Http>,
}

impl SerenityNicknameManager {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl VoiceChannelManager for SerenityNicknameManager {
    async fn apply_nickname_action(&self, request: &NicknameRequest) -> Result<String> {
        let nickname = apply_prefix(&request.current_name, request.action);

        GuildId(request.guild_id)
            .edit_member(&self.http, UserId(request.user_id), |member| {
                member.nickname(&nickname)
            })
            .await?;

        info!(
            "Nickname for user {} in guild {} set to '{nickname}' ({:?}, panel channel {})",
            request.user_id, request.guild_id, request.action, request.channel_id
        );
        Ok(nickname)
    }
}
