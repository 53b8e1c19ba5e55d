//! Activity admin command: /save_activity

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::permissions::Permissions;

use crate::commands::handlers::activity::OPTION_RESET;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_save_activity_command()]
}

/// Creates the save_activity command (Server Admin only)
fn create_save_activity_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("save_activity")
        .description("음성 활동 데이터를 저장합니다 (관리자)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .create_option(|option| {
            option
                .name(OPTION_RESET)
                .description("저장 후 활동 데이터를 초기화합니다")
                .kind(CommandOptionType::Boolean)
                .required(false)
        })
        .to_owned()
}
