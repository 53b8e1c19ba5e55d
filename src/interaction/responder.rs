//! Platform seam for interaction responses
//!
//! [`InteractionResponder`] is the only place that talks to Discord's
//! interaction endpoints. The session protocol decides *which* call to make;
//! the responder just makes it.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use std::sync::Arc;

use crate::core::{Modal, Reply};
use crate::ui::render::{apply_controls, apply_fields, apply_panel, build_embed};

#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// "Thinking…" acknowledgment without content
    async fn defer(&self, ephemeral: bool) -> Result<()>;

    /// Initial response carrying content
    async fn create_response(&self, reply: &Reply) -> Result<()>;

    /// Replace the deferred placeholder with content
    async fn edit_response(&self, reply: &Reply) -> Result<()>;

    /// Additional message after the initial response
    async fn create_followup(&self, reply: &Reply) -> Result<()>;

    /// Show a modal as the initial response
    async fn present_modal(&self, modal: &Modal) -> Result<()>;
}

/// The three interaction kinds this bot answers
#[derive(Clone)]
pub enum PlatformInteraction {
    Command(ApplicationCommandInteraction),
    Component(MessageComponentInteraction),
    Modal(ModalSubmitInteraction),
}

/// Same call on whichever interaction kind is wrapped
macro_rules! on_interaction {
    ($interaction:expr, $i:ident => $body:expr) => {
        match $interaction {
            PlatformInteraction::Command($i) => $body,
            PlatformInteraction::Component($i) => $body,
            PlatformInteraction::Modal($i) => $body,
        }
    };
}

pub struct SerenityResponder {
    http: Arc<Http>,
    interaction: PlatformInteraction,
}

impl SerenityResponder {
    pub fn new(http: Arc<Http>, interaction: PlatformInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl InteractionResponder for SerenityResponder {
    async fn defer(&self, ephemeral: bool) -> Result<()> {
        on_interaction!(&self.interaction, i => {
            i.create_interaction_response(&self.http, |response| {
                response
                    .kind(InteractionResponseType::DeferredChannelMessageWithSource)
                    .interaction_response_data(|data| data.ephemeral(ephemeral))
            })
            .await?
        });
        Ok(())
    }

    async fn create_response(&self, reply: &Reply) -> Result<()> {
        on_interaction!(&self.interaction, i => {
            i.create_interaction_response(&self.http, |response| {
                response
                    .kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|data| {
                        if let Some(content) = &reply.content {
                            data.content(content);
                        }
                        if let Some(panel) = &reply.panel {
                            data.embed(|e| apply_panel(e, panel));
                        }
                        if !reply.controls.is_empty() {
                            data.components(|c| apply_controls(c, reply));
                        }
                        data.ephemeral(reply.ephemeral)
                    })
            })
            .await?
        });
        Ok(())
    }

    async fn edit_response(&self, reply: &Reply) -> Result<()> {
        on_interaction!(&self.interaction, i => {
            i.edit_original_interaction_response(&self.http, |edit| {
                if let Some(content) = &reply.content {
                    edit.content(content);
                }
                if let Some(panel) = &reply.panel {
                    edit.set_embed(build_embed(panel));
                }
                if !reply.controls.is_empty() {
                    edit.components(|c| apply_controls(c, reply));
                }
                edit
            })
            .await?;
        });
        Ok(())
    }

    async fn create_followup(&self, reply: &Reply) -> Result<()> {
        on_interaction!(&self.interaction, i => {
            i.create_followup_message(&self.http, |message| {
                if let Some(content) = &reply.content {
                    message.content(content);
                }
                if let Some(panel) = &reply.panel {
                    message.set_embed(build_embed(panel));
                }
                if !reply.controls.is_empty() {
                    message.components(|c| apply_controls(c, reply));
                }
                message.ephemeral(reply.ephemeral)
            })
            .await?;
        });
        Ok(())
    }

    async fn present_modal(&self, modal: &Modal) -> Result<()> {
        on_interaction!(&self.interaction, i => {
            i.create_interaction_response(&self.http, |response| {
                response
                    .kind(InteractionResponseType::Modal)
                    .interaction_response_data(|data| {
                        data.custom_id(&modal.custom_id)
                            .title(&modal.title)
                            .components(|c| apply_fields(c, modal))
                    })
            })
            .await?
        });
        Ok(())
    }
}
