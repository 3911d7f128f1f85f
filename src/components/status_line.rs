use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

/// How long a status message stays visible.
pub const STATUS_VISIBLE_FOR: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    fn class(self) -> &'static str {
        match self {
            StatusKind::Info => "status status-info",
            StatusKind::Success => "status status-success",
            StatusKind::Error => "status status-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

/// The visible message plus a counter identifying which `show` put it there.
/// An expiry only clears the message it was scheduled for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusState {
    current: Option<Status>,
    generation: u64,
}

impl StatusState {
    /// Replace the message. Returns the generation to expire later.
    pub fn show(&mut self, message: String, kind: StatusKind) -> u64 {
        self.generation += 1;
        self.current = Some(Status { message, kind });
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Status> {
        self.current.as_ref()
    }
}

/// Writer side of the status line. A new message replaces the current one
/// and restarts the hide timer.
#[derive(Clone, Copy)]
pub struct StatusHandle {
    state: RwSignal<StatusState>,
    hide_timer: StoredValue<Option<TimeoutHandle>>,
}

impl StatusHandle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(StatusState::default()),
            hide_timer: StoredValue::new(None),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: StatusKind) {
        if let Some(pending) = self.hide_timer.get_value() {
            pending.clear();
        }
        let mut generation = 0;
        self.state
            .update(|state| generation = state.show(message.into(), kind));

        let state = self.state;
        let timer = set_timeout_with_handle(
            move || state.update(|s| s.expire(generation)),
            STATUS_VISIBLE_FOR,
        )
        .ok();
        self.hide_timer.set_value(timer);
    }

    pub fn current(&self) -> Option<Status> {
        self.state.with(|state| state.current().cloned())
    }
}

#[component]
pub fn StatusLine(handle: StatusHandle) -> impl IntoView {
    move || {
        handle.current().map(|status| {
            view! {
                <div class={status.kind.class()} role="status">{status.message}</div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_for_three_seconds() {
        assert_eq!(STATUS_VISIBLE_FOR, Duration::from_secs(3));
    }

    #[test]
    fn test_expiry_hides_message() {
        let mut state = StatusState::default();
        let shown = state.show("Team roster saved.".to_string(), StatusKind::Success);
        assert_eq!(state.current().map(|s| s.kind), Some(StatusKind::Success));

        state.expire(shown);
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_newest_message_wins() {
        let mut state = StatusState::default();
        let first = state.show("Checking attendance...".to_string(), StatusKind::Info);
        let second = state.show("Enter your team roster first.".to_string(), StatusKind::Error);

        // The first message's timer fires late and must not hide the second
        state.expire(first);
        let current = state.current().unwrap();
        assert_eq!(current.message, "Enter your team roster first.");
        assert_eq!(current.kind, StatusKind::Error);

        state.expire(second);
        assert_eq!(state.current(), None);
    }
}
