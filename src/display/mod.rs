//! Status notifications with a single auto-clear slot
//!
//! A [`NotificationChannel`] owns the "current message" shown on a status line,
//! plus at most one pending auto-clear. Every call to [`NotificationChannel::show`]
//! cancels the pending clear before doing anything else, so the most recent
//! timing request always wins.
//!
//! Timers are deadlines rather than threads: the owning event loop calls
//! [`NotificationChannel::tick`] on every poll and the clear fires there.

use std::time::{Duration, Instant};

use tracing::{debug, info};

/// Anything that can display a single line of status text
pub trait StatusSink {
    fn set_label(&mut self, label: &str);
}

/// Default in-memory status line, read back by the renderer
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusLine {
    label: String,
}

impl StatusLine {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl StatusSink for StatusLine {
    fn set_label(&mut self, label: &str) {
        self.label.clear();
        self.label.push_str(label);
    }
}

/// Identifies one scheduled auto-clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// The single scheduled auto-clear, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub id: TimerId,
    pub deadline: Instant,
}

/// Multi-line message surface drawn over the main view
///
/// Content is replaced wholesale on every call. Only a click hides it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overlay {
    lines: Vec<String>,
    visible: bool,
}

impl Overlay {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn replace(&mut self, message: &str) {
        self.lines = message.split('\n').map(str::to_string).collect();
        self.visible = true;
    }

    fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// Status display with last-call-wins auto-clear
#[derive(Debug)]
pub struct NotificationChannel<S: StatusSink = StatusLine> {
    sink: S,
    current: String,
    pending_clear: Option<PendingClear>,
    next_timer: u64,
    overlay: Option<Overlay>,
    mini_buffer: String,
}

impl Default for NotificationChannel<StatusLine> {
    fn default() -> Self {
        Self::new(StatusLine::default())
    }
}

impl<S: StatusSink> NotificationChannel<S> {
    /// Create a channel that only has the single-line status path
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            current: String::new(),
            pending_clear: None,
            next_timer: 0,
            overlay: None,
            mini_buffer: String::new(),
        }
    }

    /// Attach the richer overlay surface used by [`Self::pretty_print`]
    pub fn with_overlay(mut self) -> Self {
        self.overlay = Some(Overlay::default());
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn pending_clear(&self) -> Option<PendingClear> {
        self.pending_clear
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn mini_buffer(&self) -> &str {
        &self.mini_buffer
    }

    /// Show `message` now; see [`Self::show_at`]
    pub fn show(&mut self, message: &str, duration: Option<Duration>) -> Option<TimerId> {
        self.show_at(message, duration, Instant::now())
    }

    /// Replace the current message, cancelling any pending clear first.
    ///
    /// A positive `duration` schedules a clear at `now + duration` and returns
    /// its id. Zero or `None` leaves the message up until the next call.
    pub fn show_at(
        &mut self,
        message: &str,
        duration: Option<Duration>,
        now: Instant,
    ) -> Option<TimerId> {
        if let Some(cancelled) = self.pending_clear.take() {
            debug!(timer = cancelled.id.0, "cancelled pending status clear");
        }

        self.current.clear();
        self.current.push_str(message);
        self.sink.set_label(message);

        let duration = duration.filter(|d| !d.is_zero())?;
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.pending_clear = Some(PendingClear {
            id,
            deadline: now + duration,
        });
        Some(id)
    }

    /// Fire the pending clear if it is due at `now`. Returns whether it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_clear {
            Some(pending) if now >= pending.deadline => {
                self.pending_clear = None;
                self.show_at("", None, now);
                true
            }
            _ => false,
        }
    }

    /// Show multi-line text on the overlay, or on the status line without one
    pub fn pretty_print(&mut self, message: &str) {
        match self.overlay.as_mut() {
            Some(overlay) => overlay.replace(message),
            None => {
                self.show(message, None);
            }
        }
    }

    /// Hide the overlay; the status line and its timer are untouched
    pub fn dismiss_overlay(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.dismiss();
        }
    }

    pub fn echo_mini_buffer(&mut self, line: &str) {
        self.mini_buffer.clear();
        self.mini_buffer.push_str(line);
    }

    /// Write to the log rather than to any on-screen surface
    pub fn message(&self, text: &str) {
        info!(target: "rcwizard::console", "{}", text);
    }
}
