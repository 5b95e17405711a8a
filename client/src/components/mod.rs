//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navbar, toasts, inactivity warning) and
//! list/detail building blocks, reading and writing shared state from Leptos
//! context providers.

pub mod delete_button;
pub mod developer_card;
pub mod message_list;
pub mod navbar;
pub mod notification_bell;
pub mod product_card;
pub mod session_warning;
pub mod toast_host;
