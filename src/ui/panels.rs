//! Pure reply/modal builders
//!
//! Same inputs, same payload. Nothing here touches the network.

use crate::core::messages::{COLOR_INFO, COLOR_SUCCESS};
use crate::core::{Control, FieldStyle, Modal, ModalField, Panel, Reply};
use crate::services::RecruitmentKind;

use super::controls::{ControlId, NicknameAction, RecruitmentForm};

/// Modal input ids, read back on submission
pub const FIELD_TITLE: &str = "recruitment_title";
pub const FIELD_BODY: &str = "recruitment_body";
pub const FIELD_SLOTS: &str = "recruitment_slots";

/// Nickname-prefix panel posted into a channel: an info embed plus one button per action
pub fn nickname_panel(channel_name: &str, channel_id: u64) -> Reply {
    let controls = NicknameAction::ALL
        .iter()
        .map(|action| Control {
            custom_id: ControlId::new(*action, channel_id).encode(),
            label: action.label().to_string(),
            style: action.style(),
        })
        .collect();

    Reply::panel(Panel {
        title: "🏷️ 닉네임 상태 설정".to_string(),
        description: format!(
            "**{channel_name}** 채널에서 사용할 닉네임 상태를 선택하세요.\n\n\
             ⏳ **대기** - 닉네임 앞에 `[대기]`를 붙입니다.\n\
             👀 **관전** - 닉네임 앞에 `[관전]`을 붙입니다.\n\
             🔄 **초기화** - 닉네임 태그를 모두 제거합니다.\n\n\
             같은 버튼을 한 번 더 누르면 태그가 해제됩니다."
        ),
        color: COLOR_INFO,
        footer: None,
    })
    .with_controls(controls)
}

fn form_title(form: RecruitmentForm) -> &'static str {
    match form {
        RecruitmentForm::General => "구인구직 작성",
        RecruitmentForm::Special(RecruitmentKind::LongTerm) => "장기 구인 작성",
        RecruitmentForm::Special(RecruitmentKind::Scrimmage) => "내전 모집 작성",
    }
}

pub fn recruitment_modal(form: RecruitmentForm) -> Modal {
    Modal {
        custom_id: form.modal_id(),
        title: form_title(form).to_string(),
        fields: vec![
            ModalField {
                custom_id: FIELD_TITLE.to_string(),
                label: "제목".to_string(),
                style: FieldStyle::Short,
                placeholder: Some("모집 제목을 입력하세요".to_string()),
                required: true,
                max_length: 100,
            },
            ModalField {
                custom_id: FIELD_BODY.to_string(),
                label: "내용".to_string(),
                style: FieldStyle::Paragraph,
                placeholder: Some("시간, 티어, 포지션 등 상세 내용을 적어주세요".to_string()),
                required: true,
                max_length: 1000,
            },
            ModalField {
                custom_id: FIELD_SLOTS.to_string(),
                label: "모집 인원".to_string(),
                style: FieldStyle::Short,
                placeholder: Some("예: 4".to_string()),
                required: false,
                max_length: 10,
            },
        ],
    }
}

/// Channel post built from a submitted recruitment modal
pub fn recruitment_post(
    form: RecruitmentForm,
    author: &str,
    title: &str,
    body: &str,
    slots: Option<&str>,
) -> Reply {
    let mut description = body.to_string();
    if let Some(slots) = slots.map(str::trim).filter(|s| !s.is_empty()) {
        description.push_str(&format!("\n\n👥 **모집 인원:** {slots}"));
    }

    Reply::panel(Panel {
        title: format!("[{}] {title}", form_title(form)),
        description,
        color: COLOR_SUCCESS,
        footer: Some(format!("작성자: {author}")),
    })
}
