//! Owner of the single toast slot and its dismiss timers.

use std::time::{Duration, Instant};

use tracing::debug;

use super::timer_queue::{TimerHandle, TimerQueue};
use super::toast::Toast;
use crate::domain::{
    Clock, ContainerId, SystemClock, ToastContainer, ToastError, ToastOptions, ToastPhase,
    ToastPort, ToastPosition,
};

/// Longest delay a dismiss timer is armed for.
pub const MAX_DISMISS_DELAY: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Host holding at most one toast container.
///
/// A container moves `Visible -> FadingOut -> Absent`: its dismiss timer
/// starts the fade-out, and [`ToastHost::animation_end`] removes it. Inserting
/// a new container evicts the occupant immediately, together with every timer
/// bound to it.
#[derive(Debug)]
pub struct ToastHost<C: Clock = SystemClock> {
    clock: C,
    slot: Option<ToastContainer>,
    timers: TimerQueue<ContainerId>,
    next_id: u64,
}

impl Default for ToastHost<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ToastHost<C> {
    /// Creates an empty host reading time from `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            slot: None,
            timers: TimerQueue::new(),
            next_id: 1,
        }
    }

    /// Clock the host schedules against.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the container occupying the slot, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ToastContainer> {
        self.slot.as_ref()
    }

    /// Lifecycle phase of the slot.
    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.slot
            .as_ref()
            .map_or(ToastPhase::Absent, ToastContainer::phase)
    }

    /// Number of dismiss timers still armed.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns true while `handle` is pending.
    #[must_use]
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.is_scheduled(handle)
    }

    /// Earliest armed dismiss deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Evicts the current occupant and inserts a new container with a dismiss
    /// timer armed for `duration`.
    pub fn insert(
        &mut self,
        content: &str,
        position: ToastPosition,
        duration: Duration,
    ) -> (ContainerId, TimerHandle) {
        self.evict();

        let id = ContainerId::new(self.next_id);
        self.next_id += 1;

        let now = self.clock.now();
        self.slot = Some(ToastContainer::new(id, content, position, now));
        let handle = self.timers.schedule(dismiss_deadline(now, duration), id);

        debug!(
            container = %id,
            position = %position,
            duration_ms = duration.as_millis(),
            "Toast shown"
        );

        (id, handle)
    }

    /// Cancels a dismiss timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.cancel(handle).is_some()
    }

    /// Starts the exit animation of the current occupant.
    ///
    /// # Errors
    /// Returns [`ToastError::NoActiveToast`] if the slot is empty.
    pub fn begin_fade_out(&mut self) -> Result<ContainerId, ToastError> {
        let container = self.slot.as_mut().ok_or(ToastError::NoActiveToast)?;
        let id = container.id();

        self.timers.cancel_where(|target| *target == id);
        if container.mark_fading_out() {
            debug!(container = %id, "Toast fading out");
        }

        Ok(id)
    }

    /// Fires every due dismiss timer.
    ///
    /// Returns the container that started fading out, if any.
    pub fn tick(&mut self) -> Option<ContainerId> {
        let now = self.clock.now();
        let mut started = None;

        for (_, target) in self.timers.pop_due(now) {
            let is_visible_occupant = self
                .slot
                .as_ref()
                .is_some_and(|c| c.id() == target && c.phase() == ToastPhase::Visible);

            if is_visible_occupant && self.begin_fade_out().is_ok() {
                started = Some(target);
            }
        }

        started
    }

    /// Signals that the exit animation of `id` completed.
    ///
    /// Removes the container only if it still occupies the slot and is fading
    /// out. Repeated or stale signals return false and change nothing.
    pub fn animation_end(&mut self, id: ContainerId) -> bool {
        let completes = self
            .slot
            .as_ref()
            .is_some_and(|c| c.id() == id && c.phase() == ToastPhase::FadingOut);

        if completes {
            self.slot = None;
            debug!(container = %id, "Toast removed");
        }
        completes
    }

    /// Builds a toast from loosely typed options and shows it.
    ///
    /// # Errors
    /// See [`Toast::spawn`].
    pub fn toast(&mut self, options: &serde_json::Value) -> Result<Toast, ToastError> {
        Toast::spawn(options, self)
    }

    fn evict(&mut self) {
        if let Some(previous) = self.slot.take() {
            let id = previous.id();
            let cancelled = self.timers.cancel_where(|target| *target == id);
            debug!(container = %id, cancelled, "Toast evicted");
        }
    }
}

/// Deadline `duration` after `now`, capped at [`MAX_DISMISS_DELAY`].
fn dismiss_deadline(now: Instant, duration: Duration) -> Instant {
    now.checked_add(duration.min(MAX_DISMISS_DELAY)).unwrap_or(now)
}

impl<C: Clock> ToastPort for ToastHost<C> {
    fn show_toast(&mut self, options: &ToastOptions) -> Result<ContainerId, ToastError> {
        Toast::from_options(options).show(self)
    }

    fn hide_toast(&mut self) -> Result<ContainerId, ToastError> {
        self.begin_fade_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_DURATION, ManualClock, StyleClass};
    use serde_json::json;
    use test_case::test_case;

    fn host() -> (ToastHost<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (ToastHost::new(clock.clone()), clock)
    }

    #[test]
    fn test_missing_options_display_nothing() {
        let (mut host, _) = host();
        assert_eq!(
            host.toast(&json!(null)).unwrap_err(),
            ToastError::InvalidOptions
        );
        assert_eq!(
            host.toast(&json!("just text")).unwrap_err(),
            ToastError::InvalidOptions
        );
        assert!(host.active().is_none());
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_empty_content_displays_nothing() {
        let (mut host, _) = host();
        assert_eq!(
            host.toast(&json!({ "content": "" })).unwrap_err(),
            ToastError::EmptyContent
        );
        assert!(host.active().is_none());
    }

    #[test]
    fn test_default_toast() {
        let (mut host, clock) = host();
        host.toast(&json!({ "content": "X" })).unwrap();

        let container = host.active().unwrap();
        assert_eq!(container.content(), "X");
        assert_eq!(container.position(), ToastPosition::Bottom);
        assert_eq!(container.classes(), &[StyleClass::FadeIn]);
        assert_eq!(host.next_deadline(), Some(clock.now() + DEFAULT_DURATION));
    }

    #[test]
    fn test_upper_case_top_position() {
        let (mut host, _) = host();
        host.toast(&json!({ "content": "X", "position": "TOP" }))
            .unwrap();
        assert!(host.active().unwrap().has_class(StyleClass::Top));
    }

    #[test]
    fn test_unknown_position_is_bottom() {
        let (mut host, _) = host();
        host.toast(&json!({ "content": "X", "position": "left" }))
            .unwrap();
        let container = host.active().unwrap();
        assert_eq!(container.position(), ToastPosition::Bottom);
        assert!(!container.has_class(StyleClass::Top));
    }

    #[test]
    fn test_timer_starts_fade_out() {
        let (mut host, clock) = host();
        let toast = host.toast(&json!({ "content": "X" })).unwrap();
        let id = toast.container().unwrap();

        clock.advance(DEFAULT_DURATION - Duration::from_millis(1));
        assert_eq!(host.tick(), None);
        assert_eq!(host.phase(), ToastPhase::Visible);

        clock.advance(Duration::from_millis(1));
        assert_eq!(host.tick(), Some(id));
        assert_eq!(host.phase(), ToastPhase::FadingOut);
        assert!(host.active().unwrap().has_class(StyleClass::FadeOut));
    }

    #[test]
    fn test_removal_waits_for_animation_end() {
        let (mut host, clock) = host();
        let id = host.insert("X", ToastPosition::Bottom, Duration::from_millis(100)).0;

        clock.advance(Duration::from_secs(10));
        host.tick();
        host.tick();
        assert_eq!(host.phase(), ToastPhase::FadingOut);

        assert!(host.animation_end(id));
        assert_eq!(host.phase(), ToastPhase::Absent);
    }

    #[test]
    fn test_animation_end_before_fade_out_is_ignored() {
        let (mut host, _) = host();
        let id = host.insert("X", ToastPosition::Bottom, DEFAULT_DURATION).0;

        assert!(!host.animation_end(id));
        assert_eq!(host.phase(), ToastPhase::Visible);
    }

    #[test]
    fn test_repeated_animation_end_is_harmless() {
        let (mut host, _) = host();
        let id = host.insert("X", ToastPosition::Bottom, DEFAULT_DURATION).0;
        host.begin_fade_out().unwrap();

        assert!(host.animation_end(id));
        assert!(!host.animation_end(id));
        assert!(!host.animation_end(id));
        assert!(host.active().is_none());
    }

    #[test]
    fn test_begin_fade_out_on_empty_slot() {
        let (mut host, _) = host();
        assert_eq!(host.begin_fade_out(), Err(ToastError::NoActiveToast));
        assert_eq!(host.phase(), ToastPhase::Absent);
    }

    #[test]
    fn test_begin_fade_out_twice_keeps_single_class() {
        let (mut host, _) = host();
        host.insert("X", ToastPosition::Top, DEFAULT_DURATION);
        host.begin_fade_out().unwrap();
        host.begin_fade_out().unwrap();
        assert_eq!(
            host.active().unwrap().class_attr(),
            "toast-fade-in toast-top toast-fade-out"
        );
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_insert_evicts_previous_occupant() {
        let (mut host, _) = host();
        let first = host.insert("first", ToastPosition::Bottom, DEFAULT_DURATION).0;
        let second = host.insert("second", ToastPosition::Top, DEFAULT_DURATION).0;

        assert_ne!(first, second);
        assert_eq!(host.active().unwrap().id(), second);
        assert_eq!(host.active().unwrap().content(), "second");
        assert_eq!(host.pending_timers(), 1);
    }

    #[test]
    fn test_insert_evicts_fading_occupant() {
        let (mut host, _) = host();
        let first = host.insert("first", ToastPosition::Bottom, DEFAULT_DURATION).0;
        host.begin_fade_out().unwrap();

        let second = host.insert("second", ToastPosition::Bottom, DEFAULT_DURATION).0;
        assert_eq!(host.phase(), ToastPhase::Visible);

        assert!(!host.animation_end(first));
        assert_eq!(host.active().unwrap().id(), second);
    }

    #[test]
    fn test_superseded_timer_never_dismisses_successor() {
        let (mut host, clock) = host();
        host.insert("first", ToastPosition::Bottom, Duration::from_millis(1000));

        clock.advance(Duration::from_millis(500));
        let second = host.insert("second", ToastPosition::Bottom, Duration::from_millis(3000)).0;

        clock.advance(Duration::from_millis(600));
        assert_eq!(host.tick(), None);
        assert_eq!(host.phase(), ToastPhase::Visible);
        assert_eq!(host.active().unwrap().id(), second);

        clock.advance(Duration::from_millis(2400));
        assert_eq!(host.tick(), Some(second));
    }

    #[test_case(json!(1e30) ; "number_beyond_duration_range")]
    #[test_case(json!("1e20") ; "string_in_ms_far_future")]
    #[test_case(json!(1e22) ; "number_past_cap")]
    fn test_huge_duration_is_capped(duration: serde_json::Value) {
        let (mut host, clock) = host();

        let toast = host
            .toast(&json!({ "content": "X", "duration": duration }))
            .unwrap();

        assert_eq!(host.next_deadline(), Some(clock.now() + MAX_DISMISS_DELAY));
        assert!(host.is_scheduled(toast.pending_dismiss().unwrap()));

        clock.advance(MAX_DISMISS_DELAY);
        assert_eq!(host.tick(), toast.container());
    }

    #[test]
    fn test_toast_port_impl() {
        let (mut host, _) = host();
        let id = host
            .show_toast(&ToastOptions::new("via port").with_position("top"))
            .unwrap();
        assert_eq!(host.active().unwrap().position(), ToastPosition::Top);
        assert_eq!(host.hide_toast(), Ok(id));
        assert_eq!(host.phase(), ToastPhase::FadingOut);
    }
}
