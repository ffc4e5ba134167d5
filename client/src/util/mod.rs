//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! timers) from page and component logic.

pub mod clock;
pub mod markdown;
pub mod notify;
pub mod storage;
