//! Channel lookup, permission query and channel posts
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{bail, Result};
use async_trait::async_trait;
use log::debug;
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::channel::{Channel, GuildChannel};
use serenity::model::id::ChannelId;
use serenity::model::permissions::Permissions;
use std::sync::Arc;

use crate::core::Reply;
use crate::ui::render::{apply_controls, build_embed};

/// A guild channel that resolved successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub id: u64,
    pub name: String,
    pub guild_id: u64,
}

#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Not-found and fetch errors are indistinguishable to callers
    async fn fetch_channel(&self, channel_id: u64) -> Result<ResolvedChannel>;

    /// Effective permissions of the bot user in `channel`
    async fn bot_permissions(&self, channel: &ResolvedChannel) -> Result<Permissions>;

    async fn send_message(&self, channel_id: u64, reply: &Reply) -> Result<()>;
}

pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    async fn guild_channel(&self, channel_id: u64) -> Result<GuildChannel> {
        if let Some(channel) = self.cache.guild_channel(ChannelId(channel_id)) {
            return Ok(channel);
        }
        debug!("Channel {channel_id} not cached, fetching over HTTP");
        match self.http.get_channel(channel_id).await? {
            Channel::Guild(channel) => Ok(channel),
            _ => bail!("channel {channel_id} is not a guild channel"),
        }
    }
}

#[async_trait]
impl ChannelGateway for SerenityGateway {
    async fn fetch_channel(&self, channel_id: u64) -> Result<ResolvedChannel> {
        let channel = self.guild_channel(channel_id).await?;
        Ok(ResolvedChannel {
            id: channel.id.0,
            name: channel.name.clone(),
            guild_id: channel.guild_id.0,
        })
    }

    async fn bot_permissions(&self, channel: &ResolvedChannel) -> Result<Permissions> {
        let guild_channel = self.guild_channel(channel.id).await?;
        let bot_id = self.cache.current_user_id();
        Ok(guild_channel.permissions_for_user(&self.cache, bot_id)?)
    }

    async fn send_message(&self, channel_id: u64, reply: &Reply) -> Result<()> {
        ChannelId(channel_id)
            .send_message(&self.http, |m| {
                if let Some(content) = &reply.content {
                    m.content(content);
                }
                if let Some(panel) = &reply.panel {
                    m.set_embed(build_embed(panel));
                }
                if !reply.controls.is_empty() {
                    m.components(|c| apply_controls(c, reply));
                }
                m
            })
            .await?;
        Ok(())
    }
}
