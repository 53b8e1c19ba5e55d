//! Reply payload → serenity builder conversion

use serenity::builder::{CreateComponents, CreateEmbed};
use serenity::model::application::component::{ButtonStyle, InputTextStyle};

use crate::core::{ControlStyle, FieldStyle, Modal, Panel, Reply};

pub fn build_embed(panel: &Panel) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    apply_panel(&mut embed, panel);
    embed
}

pub fn apply_panel<'a>(embed: &'a mut CreateEmbed, panel: &Panel) -> &'a mut CreateEmbed {
    embed
        .title(&panel.title)
        .description(&panel.description)
        .color(panel.color);
    if let Some(footer) = &panel.footer {
        embed.footer(|f| f.text(footer));
    }
    embed
}

pub fn apply_controls<'a>(
    components: &'a mut CreateComponents,
    reply: &Reply,
) -> &'a mut CreateComponents {
    for row in reply.control_rows() {
        components.create_action_row(|action_row| {
            for control in row {
                action_row.create_button(|btn| {
                    btn.custom_id(&control.custom_id)
                        .label(&control.label)
                        .style(button_style(control.style))
                });
            }
            action_row
        });
    }
    components
}

pub fn apply_fields<'a>(
    components: &'a mut CreateComponents,
    modal: &Modal,
) -> &'a mut CreateComponents {
    for field in &modal.fields {
        components.create_action_row(|row| {
            row.create_input_text(|input| {
                input
                    .custom_id(&field.custom_id)
                    .label(&field.label)
                    .style(input_style(field.style))
                    .required(field.required)
                    .max_length(field.max_length);
                if let Some(placeholder) = &field.placeholder {
                    input.placeholder(placeholder);
                }
                input
            })
        });
    }
    components
}

fn button_style(style: ControlStyle) -> ButtonStyle {
    match style {
        ControlStyle::Primary => ButtonStyle::Primary,
        ControlStyle::Secondary => ButtonStyle::Secondary,
        ControlStyle::Success => ButtonStyle::Success,
        ControlStyle::Danger => ButtonStyle::Danger,
    }
}

fn input_style(style: FieldStyle) -> InputTextStyle {
    match style {
        FieldStyle::Short => InputTextStyle::Short,
        FieldStyle::Paragraph => InputTextStyle::Paragraph,
    }
}
