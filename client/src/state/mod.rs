//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toasts`, `ui`) so individual
//! components can depend on small focused models. Each model is provided once
//! as an `RwSignal` context by `app::App`.

pub mod auth;
pub mod toasts;
pub mod ui;
