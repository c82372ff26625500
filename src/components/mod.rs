//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared blog chrome and interaction surfaces while
//! reading session and API handles from Leptos context providers.

pub mod another_post;
pub mod article_card;
pub mod change_password_form;
pub mod comments_section;
pub mod content_editor;
pub mod delete_post_modal;
pub mod edit_profile_modal;
pub mod footer;
pub mod header;
pub mod most_liked_list;
pub mod pagination;
pub mod post_form;
pub mod recommended_list;
pub mod statistic_modal;
pub mod tag_input;
pub mod write_post_header;
