use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::model::voice::VoiceState;
use serenity::prelude::*;
use std::sync::Arc;

use voice_forum_bot::commands::{
    dispatch, register_global_commands, register_guild_commands, CommandContext, CommandRegistry,
};
use voice_forum_bot::core::Config;
use voice_forum_bot::interaction::{
    InteractionSession, Invocation, PlatformInteraction, SerenityResponder,
};
use voice_forum_bot::message_components::MessageComponentHandler;
use voice_forum_bot::services::{
    ChannelGateway, JsonActivityTracker, ModalRecruitment, RoleGatedVoiceForum, SerenityGateway,
    SerenityNicknameManager,
};

struct Handler {
    registry: CommandRegistry,
    activity: Arc<JsonActivityTracker>,
    guild_id: Option<GuildId>,
    recruitment_role_ids: Vec<u64>,
    recruitment_channel_id: Option<u64>,
}

impl Handler {
    fn new(config: &Config, activity: Arc<JsonActivityTracker>) -> Self {
        Handler {
            registry: CommandRegistry::with_default_handlers(),
            activity,
            guild_id: config.discord_guild_id.map(GuildId),
            recruitment_role_ids: config.recruitment_role_ids.clone(),
            recruitment_channel_id: config.recruitment_channel_id,
        }
    }

    /// Collaborators for one interaction, bound to this context's HTTP client and cache
    fn command_context(&self, ctx: &Context) -> CommandContext {
        let gateway: Arc<dyn ChannelGateway> =
            Arc::new(SerenityGateway::new(ctx.http.clone(), ctx.cache.clone()));
        let voice_forum = RoleGatedVoiceForum::new(
            self.recruitment_role_ids.clone(),
            ModalRecruitment::new(gateway.clone(), self.recruitment_channel_id),
        );

        CommandContext::new(
            gateway,
            Arc::new(voice_forum),
            self.activity.clone(),
            Arc::new(SerenityNicknameManager::new(ctx.http.clone())),
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            } else {
                info!("✅ Successfully registered slash commands for guild {guild_id} (instant update)");
            }
        } else if let Err(e) = register_global_commands(&ctx).await {
            error!("❌ Failed to register global slash commands: {e}");
        } else {
            info!("✅ Successfully registered slash commands globally (may take up to 1 hour to propagate)");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                let invocation = Invocation::from_command(&command);
                let responder =
                    SerenityResponder::new(ctx.http.clone(), PlatformInteraction::Command(command));
                let mut session = InteractionSession::new(invocation, Box::new(responder));
                dispatch(&self.registry, &self.command_context(&ctx), &mut session).await;
            }
            Interaction::MessageComponent(component) => {
                let invocation = Invocation::from_component(&component);
                let responder = SerenityResponder::new(
                    ctx.http.clone(),
                    PlatformInteraction::Component(component),
                );
                let mut session = InteractionSession::new(invocation, Box::new(responder));
                MessageComponentHandler::new(self.command_context(&ctx))
                    .handle_component_interaction(&mut session)
                    .await;
            }
            Interaction::ModalSubmit(modal) => {
                let invocation = Invocation::from_modal(&modal);
                let responder =
                    SerenityResponder::new(ctx.http.clone(), PlatformInteraction::Modal(modal));
                let mut session = InteractionSession::new(invocation, Box::new(responder));
                MessageComponentHandler::new(self.command_context(&ctx))
                    .handle_modal_submit(&mut session)
                    .await;
            }
            _ => {}
        }
    }

    async fn voice_state_update(&self, _ctx: Context, _old: Option<VoiceState>, new: VoiceState) {
        if new.member.as_ref().is_some_and(|m| m.user.bot) {
            return;
        }

        let user_id = new.user_id.0;
        match new.channel_id {
            Some(channel_id) => {
                debug!("User {user_id} in voice channel {channel_id}");
                self.activity.record_join(user_id, Utc::now());
            }
            None => {
                debug!("User {user_id} left voice");
                self.activity.record_leave(user_id, Utc::now());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting voice forum bot...");

    let activity = Arc::new(JsonActivityTracker::load(config.activity_data_path.clone())?);
    info!(
        "📄 Activity data at {}",
        activity.path().display()
    );

    let handler = Handler::new(&config, activity);

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
