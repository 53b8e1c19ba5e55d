//! Nickname panel command: /nickname_setup

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::commands::handlers::nickname::OPTION_CHANNEL;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_nickname_setup_command()]
}

/// Takes the channel as a string so raw ids and `<#id>` mentions both work
fn create_nickname_setup_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("nickname_setup")
        .description("닉네임 상태 설정 버튼을 채널에 게시합니다")
        .create_option(|option| {
            option
                .name(OPTION_CHANNEL)
                .description("설정 메시지를 보낼 채널 ID")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}
