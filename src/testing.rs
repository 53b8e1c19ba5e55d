//! Recording fakes for the collaborator traits, shared by unit tests

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serenity::model::permissions::Permissions;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::commands::CommandContext;
use crate::core::{Modal, Reply};
use crate::interaction::{
    InteractionResponder, InteractionSession, Invocation, InvokingUser, MemberInfo,
};
use crate::services::{
    ActivityTracker, ChannelGateway, NicknameRequest, RecruitmentKind, RecruitmentService,
    ResolvedChannel, VoiceChannelManager, VoiceForumService,
};
use crate::ui::{recruitment_modal, RecruitmentForm};

pub const GUILD_ID: u64 = 10;

pub fn member(permissions: Permissions) -> MemberInfo {
    MemberInfo {
        guild_id: GUILD_ID,
        role_ids: Vec::new(),
        nickname: None,
        permissions,
    }
}

/// Invocation from user 1 ("tester") inside the test guild
pub fn invocation(name: &str) -> Invocation {
    Invocation::new(
        name,
        InvokingUser {
            id: 1,
            name: "tester".to_string(),
        },
    )
    .with_member(member(Permissions::empty()))
}

#[derive(Debug, Clone)]
pub enum Sent {
    Defer { ephemeral: bool },
    Create(Reply),
    Edit(Reply),
    Followup(Reply),
    Modal(Modal),
}

#[derive(Clone, Default)]
pub struct RecordingResponder {
    log: Arc<Mutex<Vec<Sent>>>,
    fail_next: Arc<AtomicBool>,
}

impl RecordingResponder {
    pub fn sent(&self) -> Vec<Sent> {
        self.log.lock().unwrap().clone()
    }

    /// Initial responses, edits of a deferred response, and modals
    pub fn terminal_count(&self) -> usize {
        self.sent()
            .iter()
            .filter(|s| matches!(s, Sent::Create(_) | Sent::Edit(_) | Sent::Modal(_)))
            .count()
    }

    pub fn terminal_replies(&self) -> Vec<Reply> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Create(r) | Sent::Edit(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn followups(&self) -> Vec<Reply> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Followup(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    /// Make the next platform call fail
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            bail!("simulated platform failure");
        }
        self.log.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl InteractionResponder for RecordingResponder {
    async fn defer(&self, ephemeral: bool) -> Result<()> {
        self.record(Sent::Defer { ephemeral })
    }

    async fn create_response(&self, reply: &Reply) -> Result<()> {
        self.record(Sent::Create(reply.clone()))
    }

    async fn edit_response(&self, reply: &Reply) -> Result<()> {
        self.record(Sent::Edit(reply.clone()))
    }

    async fn create_followup(&self, reply: &Reply) -> Result<()> {
        self.record(Sent::Followup(reply.clone()))
    }

    async fn present_modal(&self, modal: &Modal) -> Result<()> {
        self.record(Sent::Modal(modal.clone()))
    }
}

#[derive(Clone, Default)]
pub struct FakeGateway {
    channels: Arc<Mutex<HashMap<u64, (String, Permissions, u64)>>>,
    posts: Arc<Mutex<Vec<(u64, Reply)>>>,
    fetches: Arc<AtomicUsize>,
    fail_send: Arc<AtomicBool>,
    fail_permissions: Arc<AtomicBool>,
}

impl FakeGateway {
    pub fn with_channel(self, id: u64, name: &str, permissions: Permissions) -> Self {
        self.with_guild_channel(GUILD_ID, id, name, permissions)
    }

    /// Channel that resolves into `guild_id` instead of the test guild
    pub fn with_guild_channel(
        self,
        guild_id: u64,
        id: u64,
        name: &str,
        permissions: Permissions,
    ) -> Self {
        self.channels
            .lock()
            .unwrap()
            .insert(id, (name.to_string(), permissions, guild_id));
        self
    }

    pub fn failing_permissions(self) -> Self {
        self.fail_permissions.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_send(self) -> Self {
        self.fail_send.store(true, Ordering::SeqCst);
        self
    }

    pub fn posts(&self) -> Vec<(u64, Reply)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChannelGateway for FakeGateway {
    async fn fetch_channel(&self, channel_id: u64) -> Result<ResolvedChannel> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let channels = self.channels.lock().unwrap();
        let (name, _, guild_id) = channels
            .get(&channel_id)
            .ok_or_else(|| anyhow!("Unknown Channel"))?;
        Ok(ResolvedChannel {
            id: channel_id,
            name: name.clone(),
            guild_id: *guild_id,
        })
    }

    async fn bot_permissions(&self, channel: &ResolvedChannel) -> Result<Permissions> {
        if self.fail_permissions.load(Ordering::SeqCst) {
            bail!("Missing Access");
        }
        let channels = self.channels.lock().unwrap();
        channels
            .get(&channel.id)
            .map(|(_, permissions, _)| *permissions)
            .ok_or_else(|| anyhow!("Missing Access"))
    }

    async fn send_message(&self, channel_id: u64, reply: &Reply) -> Result<()> {
        if self.fail_send.load(Ordering::SeqCst) {
            bail!("Missing Permissions");
        }
        self.posts.lock().unwrap().push((channel_id, reply.clone()));
        Ok(())
    }
}

/// Voice forum + recruitment fake that records delegated calls
#[derive(Clone, Default)]
pub struct FakeVoiceForum {
    allow: Arc<AtomicBool>,
    fail: Arc<AtomicBool>,
    calls: Arc<Mutex<Vec<String>>>,
    permission_checks: Arc<AtomicUsize>,
}

impl FakeVoiceForum {
    pub fn allowing() -> Self {
        let forum = Self::default();
        forum.allow.store(true, Ordering::SeqCst);
        forum
    }

    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn permission_checks(&self) -> usize {
        self.permission_checks.load(Ordering::SeqCst)
    }

    fn call(&self, name: String) -> Result<()> {
        self.calls.lock().unwrap().push(name);
        if self.fail.load(Ordering::SeqCst) {
            bail!("recruitment backend unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl VoiceForumService for FakeVoiceForum {
    fn has_recruitment_permission(&self, _user: &InvokingUser, _member: Option<&MemberInfo>) -> bool {
        self.permission_checks.fetch_add(1, Ordering::SeqCst);
        self.allow.load(Ordering::SeqCst)
    }

    async fn show_standalone_recruitment_modal(
        &self,
        session: &mut InteractionSession,
    ) -> Result<()> {
        self.call("modal".to_string())?;
        session
            .present_modal(recruitment_modal(RecruitmentForm::General))
            .await?;
        Ok(())
    }

    fn recruitment_service(&self) -> &dyn RecruitmentService {
        self
    }
}

#[async_trait]
impl RecruitmentService for FakeVoiceForum {
    async fn handle_special_recruitment_button(
        &self,
        session: &mut InteractionSession,
        kind: RecruitmentKind,
    ) -> Result<()> {
        self.call(format!("special:{}", kind.as_str()))?;
        session
            .present_modal(recruitment_modal(RecruitmentForm::Special(kind)))
            .await?;
        Ok(())
    }

    async fn handle_recruitment_submission(&self, session: &mut InteractionSession) -> Result<()> {
        self.call(format!("submit:{}", session.invocation().name))?;
        session.respond(Reply::text("posted").ephemeral()).await?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeActivityTracker {
    fail_save: Arc<AtomicBool>,
    fail_reset: Arc<AtomicBool>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeActivityTracker {
    pub fn failing_save(self) -> Self {
        self.fail_save.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_reset(self) -> Self {
        self.fail_reset.store(true, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityTracker for FakeActivityTracker {
    async fn save_activity_data(&self) -> Result<()> {
        self.calls.lock().unwrap().push("save");
        if self.fail_save.load(Ordering::SeqCst) {
            bail!("disk full");
        }
        Ok(())
    }

    async fn clear_and_reinitialize_activity_data(&self) -> Result<()> {
        self.calls.lock().unwrap().push("reset");
        if self.fail_reset.load(Ordering::SeqCst) {
            bail!("disk full");
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeNicknames {
    fail: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<NicknameRequest>>>,
}

impl FakeNicknames {
    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    pub fn requests(&self) -> Vec<NicknameRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoiceChannelManager for FakeNicknames {
    async fn apply_nickname_action(&self, request: &NicknameRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail.load(Ordering::SeqCst) {
            bail!("Missing Permissions");
        }
        Ok(crate::services::apply_prefix(&request.current_name, request.action))
    }
}

/// All fakes wired into one `CommandContext`
#[derive(Clone, Default)]
pub struct TestDeps {
    pub gateway: FakeGateway,
    pub forum: FakeVoiceForum,
    pub activity: FakeActivityTracker,
    pub nicknames: FakeNicknames,
}

impl TestDeps {
    pub fn context(&self) -> CommandContext {
        CommandContext::new(
            Arc::new(self.gateway.clone()),
            Arc::new(self.forum.clone()),
            Arc::new(self.activity.clone()),
            Arc::new(self.nicknames.clone()),
        )
    }

    pub fn session(&self, invocation: Invocation) -> (InteractionSession, RecordingResponder) {
        let responder = RecordingResponder::default();
        let session = InteractionSession::new(invocation, Box::new(responder.clone()));
        (session, responder)
    }
}
