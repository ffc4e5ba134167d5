//! Toast queue for transient notices.
//!
//! DESIGN
//! ======
//! The queue is plain data; `util::notify` pushes into it and schedules the
//! matching dismissal. Ids are monotonic so a late timer never removes a
//! newer toast.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use catalog::Notice;

/// Most toasts visible at once. Pushing past this drops the oldest.
pub const TOAST_LIMIT: usize = 3;

/// How long a toast stays up before it is dismissed.
pub const TOAST_DISMISS_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue `notice` and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > TOAST_LIMIT {
            let overflow = self.items.len() - TOAST_LIMIT;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
