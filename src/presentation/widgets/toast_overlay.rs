//! Terminal rendering of the toast slot.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};
use unicode_width::UnicodeWidthStr;

use crate::domain::{ContainerId, ToastContainer, ToastPhase, ToastPosition};
use crate::presentation::theme::Theme;

const MAX_TOAST_WIDTH: u16 = 60;
const MAX_TOAST_HEIGHT: u16 = 8;
const EDGE_MARGIN: u16 = 1;

/// Lengths of the entry and exit animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTimings {
    /// Entry animation length in milliseconds.
    pub fade_in_ms: u32,
    /// Exit animation length in milliseconds.
    pub fade_out_ms: u32,
}

/// Animation state carried across frames.
///
/// When the exit animation of a container finishes, its id becomes available
/// through [`ToastOverlayState::take_completed`]; that is the completion
/// signal the host waits for.
#[derive(Default)]
pub struct ToastOverlayState {
    tracked: Option<(ContainerId, ToastPhase)>,
    effect: Option<Effect>,
    pending_duration: Duration,
    completed: Option<ContainerId>,
}

impl ToastOverlayState {
    /// Creates state with nothing tracked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates time to advance the running animation by on the next render.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Returns the container whose exit animation finished since the last call.
    pub fn take_completed(&mut self) -> Option<ContainerId> {
        self.completed.take()
    }

    /// Returns true while an entry or exit animation runs.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.effect.is_some()
    }

    fn reset(&mut self) {
        self.tracked = None;
        self.effect = None;
        self.pending_duration = Duration::ZERO;
    }

    fn sync(&mut self, id: ContainerId, phase: ToastPhase, timings: Option<FadeTimings>) {
        if self.tracked == Some((id, phase)) {
            return;
        }

        self.tracked = Some((id, phase));
        self.pending_duration = Duration::ZERO;
        self.effect = timings.and_then(|t| match phase {
            ToastPhase::Visible => Some(fx::coalesce((t.fade_in_ms, Interpolation::CircOut))),
            ToastPhase::FadingOut => Some(fx::dissolve((t.fade_out_ms, Interpolation::CircIn))),
            ToastPhase::Absent => None,
        });
    }
}

/// Draws the active toast near the top or bottom edge of its area.
pub struct ToastOverlay<'a> {
    container: Option<&'a ToastContainer>,
    theme: &'a Theme,
    timings: Option<FadeTimings>,
}

impl<'a> ToastOverlay<'a> {
    /// Creates an overlay for the slot occupant.
    #[must_use]
    pub fn new(container: Option<&'a ToastContainer>, theme: &'a Theme) -> Self {
        Self {
            container,
            theme,
            timings: None,
        }
    }

    /// Enables entry and exit animations.
    #[must_use]
    pub const fn animated(mut self, timings: Option<FadeTimings>) -> Self {
        self.timings = timings;
        self
    }

    fn toast_area(content: &str, position: ToastPosition, area: Rect) -> Rect {
        let max_width = MAX_TOAST_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(content.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(content.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width).max(1);
        let height = lines
            .saturating_add(2)
            .min(MAX_TOAST_HEIGHT)
            .min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = match position {
            ToastPosition::Top => area.y + EDGE_MARGIN.min(area.height.saturating_sub(height)),
            ToastPosition::Bottom => area
                .bottom()
                .saturating_sub(height)
                .saturating_sub(EDGE_MARGIN)
                .max(area.y),
        };

        Rect::new(x, y, width, height).intersection(area)
    }
}

impl StatefulWidget for ToastOverlay<'_> {
    type State = ToastOverlayState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some(container) = self.container else {
            state.reset();
            return;
        };

        let id = container.id();
        let phase = container.phase();
        state.sync(id, phase, self.timings);

        let toast_area = Self::toast_area(container.content(), container.position(), area);
        if toast_area.area() == 0 {
            // Nothing to animate on screen; an exit still has to complete.
            state.effect = None;
            if phase == ToastPhase::FadingOut {
                state.completed = Some(id);
            }
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style);

        let para = Paragraph::new(container.content())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(self.theme.toast_style);

        Clear.render(toast_area, buf);
        para.render(toast_area, buf);

        let elapsed = std::mem::take(&mut state.pending_duration);

        let finished = match state.effect.as_mut() {
            Some(effect) => effect.process(elapsed.into(), buf, toast_area).is_some(),
            None => true,
        };

        if finished {
            state.effect = None;
            if phase == ToastPhase::FadingOut {
                state.completed = Some(id);
            }
        }
    }
}
