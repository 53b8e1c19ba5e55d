//! /save_activity: persist voice activity, optionally resetting it
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::{error, info};

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::core::{CommandError, Denial, Notice, Reply};
use crate::interaction::{AckMode, InteractionSession, Invocation};

pub const OPTION_RESET: &str = "reset";

pub struct SaveActivityHandler;

#[async_trait]
impl SlashCommandHandler for SaveActivityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["save_activity"]
    }

    fn ack_mode(&self, _invocation: &Invocation) -> AckMode {
        AckMode::Defer { ephemeral: true }
    }

    /// Default member permissions hide the command; this re-checks server-side
    fn authorize(&self, _ctx: &CommandContext, invocation: &Invocation) -> Result<(), CommandError> {
        let allowed = invocation.member.as_ref().is_some_and(|member| {
            member.permissions.administrator() || member.permissions.manage_guild()
        });
        if allowed {
            Ok(())
        } else {
            Err(CommandError::PermissionDenied(Denial::Feature))
        }
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        session: &mut InteractionSession,
    ) -> Result<(), CommandError> {
        let request_id = session.invocation().request_id;
        let reset = session.invocation().bool_option(OPTION_RESET).unwrap_or(false);

        ctx.activity_tracker
            .save_activity_data()
            .await
            .map_err(|err| CommandError::delegate_with(Notice::ActivitySaveFailed, err))?;
        session
            .respond(Reply::text(Notice::ActivitySaved.render()).ephemeral())
            .await?;
        info!("[{request_id}] Activity data saved");

        if !reset {
            return Ok(());
        }

        let notice = match ctx.activity_tracker.clear_and_reinitialize_activity_data().await {
            Ok(()) => {
                info!("[{request_id}] Activity data reset");
                Notice::ActivityReset
            }
            Err(err) => {
                error!("[{request_id}] Activity reset failed: {err:#}");
                Notice::ActivityResetFailed
            }
        };
        session
            .respond_additional(Reply::text(notice.render()).ephemeral())
            .await?;
        Ok(())
    }
}
