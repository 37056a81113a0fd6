//! Reusable view components.

pub mod edit_user_dialog;
pub mod nav_bar;
pub mod resource_view;
pub mod team_card;
pub mod user_card;
pub mod workout_card;
