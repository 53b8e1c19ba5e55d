//! # UI Construction
//!
//! Control identifiers, pure panel/modal builders, and conversion to
//! serenity builders.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod controls;
pub mod panels;
pub mod render;

pub use controls::{ControlId, ControlIdError, NicknameAction, RecruitmentForm};
pub use panels::{nickname_panel, recruitment_modal, recruitment_post};
