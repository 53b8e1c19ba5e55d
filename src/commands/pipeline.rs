//! Command execution pipeline
//!
//! acknowledge → authorize → run, with every failure caught once here and
//! reported as a single ephemeral notice.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use log::{debug, error, info, warn};
use std::error::Error as _;
use std::time::Instant;

use super::context::CommandContext;
use super::handler::SlashCommandHandler;
use crate::core::{CommandError, Notice, Reply};
use crate::interaction::InteractionSession;

pub async fn execute(
    handler: &dyn SlashCommandHandler,
    ctx: &CommandContext,
    session: &mut InteractionSession,
) {
    let started = Instant::now();
    let request_id = session.invocation().request_id;
    let name = session.invocation().name.clone();
    debug!("[{request_id}] Executing /{name} for user {}", session.invocation().user.id);

    match run_stages(handler, ctx, session).await {
        Ok(()) if session.is_responded() => {
            info!("[{request_id}] /{name} completed in {:?}", started.elapsed());
        }
        Ok(()) => {
            warn!("[{request_id}] /{name} returned without responding");
            send_notice(session, Notice::GenericFailure).await;
        }
        Err(err) => report_failure(session, &err).await,
    }
}

async fn run_stages(
    handler: &dyn SlashCommandHandler,
    ctx: &CommandContext,
    session: &mut InteractionSession,
) -> Result<(), CommandError> {
    session
        .acknowledge(handler.ack_mode(session.invocation()))
        .await?;
    handler.authorize(ctx, session.invocation())?;
    handler.run(ctx, session).await
}

/// Log `err` and, unless the interaction already has its terminal response,
/// send the matching notice
pub async fn report_failure(session: &mut InteractionSession, err: &CommandError) {
    let request_id = session.invocation().request_id;
    let name = session.invocation().name.clone();

    if err.is_expected() {
        warn!("[{request_id}] /{name} rejected: {err}");
    } else {
        error!("[{request_id}] /{name} failed: {}", error_chain(err));
    }

    if session.is_responded() {
        debug!("[{request_id}] /{name} already responded, notice not sent");
        return;
    }
    send_notice(session, err.notice()).await;
}

async fn send_notice(session: &mut InteractionSession, notice: Notice) {
    let request_id = session.invocation().request_id;
    if let Err(err) = session.respond(Reply::text(notice.render()).ephemeral()).await {
        error!("[{request_id}] Failed to deliver failure notice: {err}");
    }
}

fn error_chain(err: &CommandError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
