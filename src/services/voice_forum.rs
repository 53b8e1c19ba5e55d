//! Role-gated recruitment with modal forms
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::{ChannelGateway, RecruitmentKind, RecruitmentService, VoiceForumService};
use crate::core::{Notice, Reply};
use crate::interaction::{AckMode, InteractionSession, InvokingUser, MemberInfo};
use crate::ui::panels::{FIELD_BODY, FIELD_SLOTS, FIELD_TITLE};
use crate::ui::{recruitment_modal, recruitment_post, RecruitmentForm};

/// Grants recruitment to guild admins/managers and to configured roles
pub struct RoleGatedVoiceForum {
    allowed_roles: Vec<u64>,
    recruitment: ModalRecruitment,
}

impl RoleGatedVoiceForum {
    pub fn new(allowed_roles: Vec<u64>, recruitment: ModalRecruitment) -> Self {
        Self {
            allowed_roles,
            recruitment,
        }
    }
}

#[async_trait]
impl VoiceForumService for RoleGatedVoiceForum {
    fn has_recruitment_permission(&self, _user: &InvokingUser, member: Option<&MemberInfo>) -> bool {
        let Some(member) = member else {
            return false;
        };
        member.permissions.administrator()
            || member.permissions.manage_guild()
            || member
                .role_ids
                .iter()
                .any(|role| self.allowed_roles.contains(role))
    }

    async fn show_standalone_recruitment_modal(
        &self,
        session: &mut InteractionSession,
    ) -> Result<()> {
        session
            .present_modal(recruitment_modal(RecruitmentForm::General))
            .await?;
        Ok(())
    }

    fn recruitment_service(&self) -> &dyn RecruitmentService {
        &self.recruitment
    }
}

/// Presents recruitment modals and posts submissions to a channel
pub struct ModalRecruitment {
    gateway: Arc<dyn ChannelGateway>,
    /// Falls back to the channel the modal was submitted from
    target_channel: Option<u64>,
}

impl ModalRecruitment {
    pub fn new(gateway: Arc<dyn ChannelGateway>, target_channel: Option<u64>) -> Self {
        Self {
            gateway,
            target_channel,
        }
    }
}

#[async_trait]
impl RecruitmentService for ModalRecruitment {
    async fn handle_special_recruitment_button(
        &self,
        session: &mut InteractionSession,
        kind: RecruitmentKind,
    ) -> Result<()> {
        session
            .present_modal(recruitment_modal(RecruitmentForm::Special(kind)))
            .await?;
        Ok(())
    }

    async fn handle_recruitment_submission(&self, session: &mut InteractionSession) -> Result<()> {
        session
            .acknowledge(AckMode::Defer { ephemeral: true })
            .await?;

        let invocation = session.invocation();
        let form = RecruitmentForm::from_modal_id(&invocation.name)
            .with_context(|| format!("unknown recruitment form '{}'", invocation.name))?;
        let title = invocation.string_option(FIELD_TITLE).unwrap_or_default();
        let body = invocation.string_option(FIELD_BODY).unwrap_or_default();
        let post = recruitment_post(
            form,
            &invocation.user.name,
            title,
            body,
            invocation.string_option(FIELD_SLOTS),
        );

        let target = self.target_channel.unwrap_or(invocation.channel_id);
        let channel = self.gateway.fetch_channel(target).await?;
        self.gateway.send_message(channel.id, &post).await?;
        info!(
            "[{}] Recruitment '{}' posted to #{} by {}",
            invocation.request_id,
            form.key(),
            channel.name,
            invocation.user.id
        );

        session
            .respond(
                Reply::text(
                    Notice::RecruitmentPosted {
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
