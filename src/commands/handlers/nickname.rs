//! /nickname_setup: post the nickname-tag panel into a channel
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::{debug, info};
use regex::Regex;
use serenity::model::permissions::Permissions;

use super::require_recruitment_permission;
use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::core::{CommandError, Denial, Notice, Reply, ResourceKind};
use crate::interaction::{AckMode, InteractionSession, Invocation};
use crate::ui::nickname_panel;

pub const OPTION_CHANNEL: &str = "channel_id";

/// Capabilities the bot needs in the target channel
fn required_permissions() -> Permissions {
    Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES
}

/// Accepts a raw snowflake or a `<#id>` channel mention
pub fn parse_channel_reference(raw: &str) -> Option<u64> {
    let re = Regex::new(r"^(?:<#(\d+)>|(\d+))$").ok()?;
    let caps = re.captures(raw.trim())?;
    caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()
}

pub struct NicknameSetupHandler;

#[async_trait]
impl SlashCommandHandler for NicknameSetupHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["nickname_setup"]
    }

    fn ack_mode(&self, _invocation: &Invocation) -> AckMode {
        AckMode::Defer { ephemeral: true }
    }

    fn authorize(&self, ctx: &CommandContext, invocation: &Invocation) -> Result<(), CommandError> {
        require_recruitment_permission(ctx, invocation)
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        session: &mut InteractionSession,
    ) -> Result<(), CommandError> {
        let request_id = session.invocation().request_id;
        let raw = session
            .invocation()
            .string_option(OPTION_CHANNEL)
            .unwrap_or_default()
            .to_string();

        let channel_id = parse_channel_reference(&raw)
            .ok_or_else(|| CommandError::invalid(ResourceKind::Channel, raw.as_str()))?;
        let channel = ctx.gateway.fetch_channel(channel_id).await.map_err(|err| {
            debug!("[{request_id}] Channel {channel_id} did not resolve: {err}");
            CommandError::invalid(ResourceKind::Channel, raw.as_str())
        })?;
        // Channels of other guilds the bot is in are not addressable from here
        if Some(channel.guild_id) != session.invocation().guild_id() {
            debug!(
                "[{request_id}] Channel {channel_id} belongs to guild {}",
                channel.guild_id
            );
            return Err(CommandError::invalid(ResourceKind::Channel, raw));
        }

        let granted = match ctx.gateway.bot_permissions(&channel).await {
            Ok(permissions) => permissions.contains(required_permissions()),
            Err(err) => {
                debug!("[{request_id}] Permission query for #{} failed: {err}", channel.name);
                false
            }
        };
        if !granted {
            return Err(CommandError::PermissionDenied(Denial::Channel {
                name: channel.name,
            }));
        }

        ctx.gateway
            .send_message(channel.id, &nickname_panel(&channel.name, channel.id))
            .await
            .map_err(CommandError::delegate)?;
        info!("[{request_id}] Nickname panel sent to #{} ({})", channel.name, channel.id);

        session
            .respond(
                Reply::text(
                    Notice::NicknamePanelSent {
                        channel: channel.name,
                    }
                    .render(),
                )
                .ephemeral(),
            )
            .await?;
        Ok(())
    }
}
