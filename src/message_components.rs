//! Button and modal routing
//!
//! Button presses are routed purely from their [`ControlId`]; modal
//! submissions from their recruitment form id. Both go through the same
//! [`InteractionSession`] protocol as slash commands.

use log::{info, warn};

use crate::commands::handlers::require_recruitment_permission;
use crate::commands::pipeline::report_failure;
use crate::commands::CommandContext;
use crate::core::{CommandError, Notice, Reply};
use crate::interaction::{AckMode, InteractionSession};
use crate::services::NicknameRequest;
use crate::ui::{ControlId, RecruitmentForm};

/// Handler for all message component and modal interactions
pub struct MessageComponentHandler {
    ctx: CommandContext,
}

impl MessageComponentHandler {
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }

    /// Handle a button press
    pub async fn handle_component_interaction(&self, session: &mut InteractionSession) {
        let request_id = session.invocation().request_id;
        let custom_id = session.invocation().name.clone();
        info!(
            "[{request_id}] Processing component interaction: {custom_id} from user: {}",
            session.invocation().user.id
        );

        let control = match ControlId::parse(&custom_id) {
            Ok(control) => control,
            Err(err) => {
                warn!("[{request_id}] Unroutable component: {err}");
                send_notice(session, Notice::UnknownControl).await;
                return;
            }
        };

        if let Err(err) = self.handle_nickname_button(session, control).await {
            report_failure(session, &err).await;
        }
    }

    /// Handle a modal submission
    pub async fn handle_modal_submit(&self, session: &mut InteractionSession) {
        let request_id = session.invocation().request_id;
        let custom_id = session.invocation().name.clone();

        if RecruitmentForm::from_modal_id(&custom_id).is_none() {
            warn!("[{request_id}] Unknown modal submission: {custom_id}");
            send_notice(session, Notice::UnknownControl).await;
            return;
        }

        let result = match require_recruitment_permission(&self.ctx, session.invocation()) {
            Ok(()) => self
                .ctx
                .voice_forum
                .recruitment_service()
                .handle_recruitment_submission(session)
                .await
                .map_err(CommandError::delegate),
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            report_failure(session, &err).await;
        }
    }

    async fn handle_nickname_button(
        &self,
        session: &mut InteractionSession,
        control: ControlId,
    ) -> Result<(), CommandError> {
        let invocation = session.invocation();
        let username = invocation.user.name.clone();
        let request = invocation.member.as_ref().map(|member| NicknameRequest {
            guild_id: member.guild_id,
            user_id: invocation.user.id,
            current_name: member
                .nickname
                .clone()
                .unwrap_or_else(|| invocation.user.name.clone()),
            channel_id: control.channel_id,
            action: control.action,
        });
        let Some(request) = request else {
            send_notice(session, Notice::GuildOnly).await;
            return Ok(());
        };

        session
            .acknowledge(AckMode::Defer { ephemeral: true })
            .await?;

        let nickname = self
            .ctx
            .voice_channels
            .apply_nickname_action(&request)
            .await
            .map_err(|err| CommandError::delegate_with(Notice::NicknameUpdateFailed, err))?;
        // Tag-only names reset to empty, which the platform displays as the username
        let nickname = if nickname.is_empty() { username } else { nickname };

        session
            .respond(Reply::text(Notice::NicknameUpdated { nickname }.render()).ephemeral())
            .await?;
        Ok(())
    }
}

async fn send_notice(session: &mut InteractionSession, notice: Notice) {
    let request_id = session.invocation().request_id;
    if let Err(err) = session
        .respond(Reply::text(notice.render()).ephemeral())
        .await
    {
        warn!("[{request_id}] Failed to send {notice:?}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::OptionValue;
    use crate::testing::{
        invocation, FakeNicknames, FakeVoiceForum, RecordingResponder, Sent, TestDeps,
    };
    use crate::ui::panels::FIELD_TITLE;
    use crate::ui::NicknameAction;

    async fn press(deps: &TestDeps, custom_id: &str, in_guild: bool) -> RecordingResponder {
        let mut inv = invocation(custom_id);
        if !in_guild {
            inv.member = None;
        }
        let (mut session, responder) = deps.session(inv);
        MessageComponentHandler::new(deps.context())
            .handle_component_interaction(&mut session)
            .await;
        responder
    }

    async fn submit(deps: &TestDeps, custom_id: &str) -> RecordingResponder {
        let inv = invocation(custom_id).with_option(FIELD_TITLE, OptionValue::String("x".into()));
        let (mut session, responder) = deps.session(inv);
        MessageComponentHandler::new(deps.context())
            .handle_modal_submit(&mut session)
            .await;
        responder
    }

    #[tokio::test]
    async fn test_routed_press_updates_nickname() {
        let deps = TestDeps::default();
        let responder = press(&deps, "nickname_wait_555", true).await;

        let requests = deps.nicknames.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].action, NicknameAction::Waiting);
        assert_eq!(requests[0].channel_id, 555);
        assert_eq!(requests[0].current_name, "tester");

        match responder.sent().as_slice() {
            [Sent::Defer { ephemeral: true }, Sent::Edit(reply)] => assert_eq!(
                reply.content,
                Some(
                    Notice::NicknameUpdated {
                        nickname: "[대기] tester".into()
                    }
                    .render()
                )
            ),
            other => panic!("unexpected responses: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reset_of_tag_only_nickname_reports_username() {
        let deps = TestDeps::default();
        let mut inv = invocation("nickname_reset_555");
        if let Some(member) = inv.member.as_mut() {
            member.nickname = Some("[대기]".into());
        }
        let (mut session, responder) = deps.session(inv);
        MessageComponentHandler::new(deps.context())
            .handle_component_interaction(&mut session)
            .await;

        assert_eq!(deps.nicknames.requests()[0].current_name, "[대기]");
        assert_eq!(
            responder.terminal_replies()[0].content,
            Some(
                Notice::NicknameUpdated {
                    nickname: "tester".into()
                }
                .render()
            )
        );
    }

    #[tokio::test]
    async fn test_unknown_prefix_is_unroutable() {
        let deps = TestDeps::default();
        let responder = press(&deps, "nickname_dance_555", true).await;

        assert!(deps.nicknames.requests().is_empty());
        match responder.sent().as_slice() {
            [Sent::Create(reply)] => {
                assert_eq!(reply.content, Some(Notice::UnknownControl.render()))
            }
            other => panic!("unexpected responses: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_numeric_target_is_unroutable() {
        let deps = TestDeps::default();
        let responder = press(&deps, "nickname_reset_abc", true).await;

        assert!(deps.nicknames.requests().is_empty());
        assert_eq!(
            responder.terminal_replies()[0].content,
            Some(Notice::UnknownControl.render())
        );
    }

    #[tokio::test]
    async fn test_press_outside_guild() {
        let deps = TestDeps::default();
        let responder = press(&deps, "nickname_wait_555", false).await;

        assert!(deps.nicknames.requests().is_empty());
        assert_eq!(
            responder.terminal_replies()[0].content,
            Some(Notice::GuildOnly.render())
        );
    }

    #[tokio::test]
    async fn test_nickname_failure_sends_failure_notice() {
        let deps = TestDeps {
            nicknames: FakeNicknames::default().failing(),
            ..TestDeps::default()
        };
        let responder = press(&deps, "nickname_spectate_555", true).await;

        assert_eq!(responder.terminal_count(), 1);
        let reply = &responder.terminal_replies()[0];
        assert_eq!(reply.content, Some(Notice::NicknameUpdateFailed.render()));
        assert!(!reply.visible_text().contains("Missing Permissions"));
    }

    #[tokio::test]
    async fn test_recruitment_submission_is_forwarded() {
        let deps = TestDeps {
            forum: FakeVoiceForum::allowing(),
            ..TestDeps::default()
        };
        let responder = submit(&deps, "recruitment_modal_general").await;

        assert_eq!(
            deps.forum.calls(),
            vec!["submit:recruitment_modal_general".to_string()]
        );
        assert_eq!(responder.terminal_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_modal_is_rejected() {
        let deps = TestDeps {
            forum: FakeVoiceForum::allowing(),
            ..TestDeps::default()
        };
        let responder = submit(&deps, "feedback_modal").await;

        assert!(deps.forum.calls().is_empty());
        assert_eq!(
            responder.terminal_replies()[0].content,
            Some(Notice::UnknownControl.render())
        );
    }

    #[tokio::test]
    async fn test_submission_requires_recruitment_permission() {
        let deps = TestDeps::default();
        let responder = submit(&deps, "recruitment_modal_scrimmage").await;

        assert!(deps.forum.calls().is_empty());
        assert_eq!(
            responder.terminal_replies()[0].content,
            Some(Notice::FeatureDenied.render())
        );
    }
}
