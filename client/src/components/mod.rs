//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace chrome and listing cards while reading
//! shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod listing_card;
pub mod site_header;
pub mod stat_card;
