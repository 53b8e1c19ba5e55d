//! Request-scoped view of an inbound interaction
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serenity::model::application::component::ActionRowComponent;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption,
};
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::guild::Member;
use serenity::model::permissions::Permissions;
use serenity::model::user::User;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

/// Guild membership of the invoking user
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub guild_id: u64,
    pub role_ids: Vec<u64>,
    pub nickname: Option<String>,
    pub permissions: Permissions,
}

impl MemberInfo {
    fn from_member(member: &Member) -> Self {
        Self {
            guild_id: member.guild_id.0,
            role_ids: member.roles.iter().map(|r| r.0).collect(),
            nickname: member.nick.clone(),
            permissions: member.permissions.unwrap_or_else(Permissions::empty),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvokingUser {
    pub id: u64,
    pub name: String,
}

impl InvokingUser {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.clone(),
        }
    }
}

/// One interaction: a slash command, a button press, or a modal submission.
///
/// `name` is the command name for slash commands and the custom id for
/// components and modals.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub request_id: Uuid,
    pub name: String,
    pub user: InvokingUser,
    pub member: Option<MemberInfo>,
    pub channel_id: u64,
    pub options: Vec<(String, OptionValue)>,
}

impl Invocation {
    pub fn new(name: impl Into<String>, user: InvokingUser) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            name: name.into(),
            user,
            member: None,
            channel_id: 0,
            options: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.member = Some(member);
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options.push((name.into(), value));
        self
    }

    pub fn from_command(command: &ApplicationCommandInteraction) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            name: command.data.name.clone(),
            user: InvokingUser::from_user(&command.user),
            member: command.member.as_ref().map(MemberInfo::from_member),
            channel_id: command.channel_id.0,
            options: command.data.options.iter().filter_map(convert_option).collect(),
        }
    }

    pub fn from_component(component: &MessageComponentInteraction) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            name: component.data.custom_id.clone(),
            user: InvokingUser::from_user(&component.user),
            member: component.member.as_ref().map(MemberInfo::from_member),
            channel_id: component.channel_id.0,
            options: Vec::new(),
        }
    }

    /// Modal text inputs become string options keyed by their custom id
    pub fn from_modal(modal: &ModalSubmitInteraction) -> Self {
        let options = modal
            .data
            .components
            .iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::InputText(input) => Some((
                    input.custom_id.clone(),
                    OptionValue::String(input.value.clone()),
                )),
                _ => None,
            })
            .collect();

        Self {
            request_id: Uuid::new_v4(),
            name: modal.data.custom_id.clone(),
            user: InvokingUser::from_user(&modal.user),
            member: modal.member.as_ref().map(MemberInfo::from_member),
            channel_id: modal.channel_id.0,
            options,
        }
    }

    fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn string_option(&self, name: &str) -> Option<&str> {
        match self.option(name)? {
            OptionValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn integer_option(&self, name: &str) -> Option<i64> {
        match self.option(name)? {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn bool_option(&self, name: &str) -> Option<bool> {
        match self.option(name)? {
            OptionValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn guild_id(&self) -> Option<u64> {
        self.member.as_ref().map(|m| m.guild_id)
    }
}

/// Shape-validated by Discord already; only the JSON value kind is inspected here
fn convert_option(option: &CommandDataOption) -> Option<(String, OptionValue)> {
    let value = option.value.as_ref()?;
    let converted = if let Some(s) = value.as_str() {
        OptionValue::String(s.to_string())
    } else if let Some(i) = value.as_i64() {
        OptionValue::Integer(i)
    } else if let Some(b) = value.as_bool() {
        OptionValue::Boolean(b)
    } else {
        return None;
    };
    Some((option.name.clone(), converted))
}
