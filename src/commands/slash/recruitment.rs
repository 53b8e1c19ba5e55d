//! Recruitment command: /recruitment

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

use crate::commands::handlers::recruitment::OPTION_TYPE;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_recruitment_command()]
}

fn create_recruitment_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("recruitment")
        .description("구인구직 글을 작성합니다")
        .create_option(|option| {
            option
                .name(OPTION_TYPE)
                .description("특수 모집 유형 (생략하면 일반 구인구직)")
                .kind(CommandOptionType::Integer)
                .required(false)
                .add_int_choice("장기 구인", 1)
                .add_int_choice("내전 모집", 2)
        })
        .to_owned()
}
