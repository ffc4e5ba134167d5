//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and catalog cards while reading/writing
//! shared state from Leptos context providers.

pub mod impact_bars;
pub mod layout;
pub mod navbar;
pub mod problem_card;
pub mod sidebar;
pub mod solution_card;
pub mod stat_card;
pub mod toaster;
