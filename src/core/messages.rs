//! User-facing notice templates
//!
//! Every string a user can see from the command layer lives here, keyed by
//! outcome. Handlers pick a [`Notice`] and never format text themselves.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// Embed accent colors
pub const COLOR_INFO: u32 = 0x5865F2;
pub const COLOR_SUCCESS: u32 = 0x57F287;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FeatureDenied,
    InvalidChannel,
    ChannelPermissionDenied { channel: String },
    NicknamePanelSent { channel: String },
    NicknameUpdated { nickname: String },
    NicknameUpdateFailed,
    UnknownControl,
    GuildOnly,
    InvalidRecruitmentType,
    RecruitmentPosted { channel: String },
    ActivitySaved,
    ActivitySaveFailed,
    ActivityReset,
    ActivityResetFailed,
    GenericFailure,
}

impl Notice {
    pub fn render(&self) -> String {
        match self {
            Notice::FeatureDenied => "❌ 이 기능을 사용할 권한이 없습니다.".to_string(),
            Notice::InvalidChannel => {
                "❌ 유효하지 않은 채널 ID입니다. 채널 ID를 다시 확인해주세요.".to_string()
            }
            Notice::ChannelPermissionDenied { channel } => {
                format!("❌ **{channel}** 채널에 메시지를 보낼 권한이 부족합니다.")
            }
            Notice::NicknamePanelSent { channel } => {
                format!("✅ **{channel}** 채널에 닉네임 설정 메시지를 전송했습니다.")
            }
            Notice::NicknameUpdated { nickname } => {
                format!("✅ 닉네임이 **{nickname}**(으)로 변경되었습니다.")
            }
            Notice::NicknameUpdateFailed => {
                "❌ 닉네임을 변경하지 못했습니다. 봇의 역할 순서와 권한을 확인해주세요.".to_string()
            }
            Notice::UnknownControl => "❌ 알 수 없는 버튼입니다.".to_string(),
            Notice::GuildOnly => "❌ 서버에서만 사용할 수 있는 기능입니다.".to_string(),
            Notice::InvalidRecruitmentType => "❌ 알 수 없는 구인구직 유형입니다.".to_string(),
            Notice::RecruitmentPosted { channel } => {
                format!("✅ **{channel}** 채널에 구인구직 글이 등록되었습니다.")
            }
            Notice::ActivitySaved => "✅ 활동 데이터가 저장되었습니다.".to_string(),
            Notice::ActivitySaveFailed => "❌ 활동 데이터 저장 중 오류가 발생했습니다.".to_string(),
            Notice::ActivityReset => "🔄 활동 데이터가 초기화되었습니다.".to_string(),
            Notice::ActivityResetFailed => {
                "❌ 활동 데이터 초기화 중 오류가 발생했습니다.".to_string()
            }
            Notice::GenericFailure => {
                "❌ 명령어 처리 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.".to_string()
            }
        }
    }
}
