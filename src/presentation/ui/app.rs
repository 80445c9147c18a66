//! Terminal host driving the toast lifecycle.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::Paragraph,
};
use tokio::time::{Interval, MissedTickBehavior, interval, sleep_until};
use tracing::{debug, info, warn};

use crate::application::{ApiErrorReport, ReportApiErrorUseCase, Toast, ToastHost};
use crate::domain::{Clock, SystemClock, ToastError, ToastOptions, ToastPhase};
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventHandler, EventResult, KEY_HINTS, KeyAction};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FadeTimings, FooterBar, FooterBarStyle, ToastOverlay, ToastOverlayState,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

/// Failed responses replayed by the error key.
const SAMPLE_ERRORS: &[(u16, &str)] = &[
    (400, r#"{"detail": "Provider with same name already exists."}"#),
    (404, r#"{"detail": "Provider not found."}"#),
    (
        422,
        r#"{"detail": [{"loc": ["body", "phone"], "msg": "field required", "type": "value_error.missing"}]}"#,
    ),
    (502, "<html>Bad Gateway</html>"),
];

/// Animation ticker that drops ticks missed while the loop was idle.
fn animation_interval() -> Interval {
    let mut ticker = interval(ANIMATION_TICK_RATE);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Terminal application owning the toast host.
pub struct App<C: Clock = SystemClock> {
    host: ToastHost<C>,
    overlay: ToastOverlayState,
    theme: Theme,
    timings: Option<FadeTimings>,
    report_api_error: ReportApiErrorUseCase,
    current: Option<Toast>,
    shown: usize,
    next_error: usize,
    exiting: bool,
}

impl App {
    /// Builds the app on the system clock.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_host(config, ToastHost::default())
    }
}

impl<C: Clock> App<C> {
    /// Builds the app around an existing host.
    #[must_use]
    pub fn with_host(config: &AppConfig, host: ToastHost<C>) -> Self {
        let timings = config.toast.enable_animations.then_some(FadeTimings {
            fade_in_ms: config.toast.fade_in_ms,
            fade_out_ms: config.toast.fade_out_ms,
        });

        Self {
            host,
            overlay: ToastOverlayState::new(),
            theme: Theme::new(&config.theme.accent_color),
            timings,
            report_api_error: ReportApiErrorUseCase::new(
                config.errors.duration(),
                config.errors.position,
            ),
            current: None,
            shown: 0,
            next_error: 0,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        startup_toast: Option<ToastOptions>,
    ) -> color_eyre::Result<()> {
        if let Some(options) = startup_toast {
            self.show(&options);
        }

        self.run_event_loop(terminal).await?;

        info!(shown = self.shown, "Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = animation_interval();

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let dismiss_timer = match self.host.next_deadline() {
                Some(deadline) => Either::Left(sleep_until(deadline.into())),
                None => Either::Right(std::future::pending()),
            };
            let animating = self.host.active().is_some();
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                () = dismiss_timer => {
                    self.fire_dismiss_timers();
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick(), if animating => {
                    self.overlay.tick(ANIMATION_TICK_RATE);
                    terminal.draw(|frame| self.render(frame))?;

                    if self.deliver_animation_end() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                maybe_event = terminal_event => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(&event) == EventResult::Exit {
                                self.exiting = true;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => warn!(error = %e, "Terminal event error"),
                        None => self.exiting = true,
                    }
                }
            }
        }

        Ok(())
    }

    fn fire_dismiss_timers(&mut self) {
        if let Some(id) = self.host.tick() {
            debug!(container = %id, "Dismiss timer fired");
        }
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        let Some(action) = EventHandler::action_for(key) else {
            return EventResult::Continue;
        };

        match action {
            KeyAction::Quit => return EventResult::Exit,
            KeyAction::ShowTop => {
                let options = ToastOptions::new(format!("Toast #{} at the top", self.shown + 1))
                    .with_position("top");
                self.show(&options);
            }
            KeyAction::ShowBottom => {
                let options = ToastOptions::new(format!("Toast #{}", self.shown + 1));
                self.show(&options);
            }
            KeyAction::ReportError => self.report_next_error(),
            KeyAction::Hide => self.hide(),
        }

        EventResult::Continue
    }

    fn show(&mut self, options: &ToastOptions) {
        let mut toast = Toast::from_options(options);
        match toast.show(&mut self.host) {
            Ok(id) => {
                self.shown += 1;
                debug!(container = %id, "Toast displayed");
                self.current = Some(toast);
            }
            Err(e) => warn!(error = %e, "Toast not shown"),
        }
    }

    fn report_next_error(&mut self) {
        let (status, body) = SAMPLE_ERRORS[self.next_error % SAMPLE_ERRORS.len()];
        self.next_error += 1;

        let report = ApiErrorReport::new(status, body);
        match self.report_api_error.execute(&mut self.host, &report) {
            Ok(_) => self.shown += 1,
            Err(e) => warn!(error = %e, "Error toast not shown"),
        }
    }

    fn hide(&mut self) {
        let result = match self.current.as_mut() {
            Some(toast) => toast.hide(&mut self.host),
            None => self.host.begin_fade_out(),
        };

        if let Err(ToastError::NoActiveToast) = result {
            debug!("Nothing to hide");
        }
    }

    fn deliver_animation_end(&mut self) -> bool {
        self.overlay
            .take_completed()
            .is_some_and(|id| self.host.animation_end(id))
    }

    fn render(&mut self, frame: &mut Frame) {
        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let intro = vec![
            Line::from(format!(" {} {}", crate::NAME, crate::VERSION)),
            Line::from(format!(" toasts shown: {}", self.shown)),
        ];
        frame.render_widget(Paragraph::new(intro).style(self.theme.dimmed_style), body);

        frame.render_stateful_widget(
            ToastOverlay::new(self.host.active(), &self.theme).animated(self.timings),
            body,
            &mut self.overlay,
        );

        let phase = match self.host.phase() {
            ToastPhase::Absent => "idle",
            ToastPhase::Visible => "visible",
            ToastPhase::FadingOut => "fading out",
        };
        frame.render_widget(
            FooterBar::new(KEY_HINTS)
                .right_info(Some(phase))
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_DURATION, ManualClock, StyleClass, ToastPosition};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn press<C: Clock>(app: &mut App<C>, c: char) -> EventResult {
        app.handle_key(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_top_key_shows_top_toast() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(press(&mut app, 't'), EventResult::Continue);

        let container = app.host.active().unwrap();
        assert!(container.has_class(StyleClass::Top));
        assert_eq!(container.content(), "Toast #1 at the top");
    }

    #[test]
    fn test_repeated_show_keeps_one_toast() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, 'b');
        press(&mut app, 'b');
        press(&mut app, 't');

        assert_eq!(app.shown, 3);
        assert_eq!(app.host.pending_timers(), 1);
        assert_eq!(app.host.active().unwrap().content(), "Toast #3 at the top");
    }

    #[test]
    fn test_error_key_uses_error_contract() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, 'e');

        let container = app.host.active().unwrap();
        assert_eq!(container.content(), "Provider with same name already exists.");
        assert_eq!(container.position(), ToastPosition::Bottom);
        assert_eq!(
            app.host.next_deadline().unwrap() - container.shown_at(),
            Duration::from_millis(4000)
        );
    }

    #[test]
    fn test_hide_key() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, 'h');
        assert_eq!(app.host.phase(), ToastPhase::Absent);

        press(&mut app, 'b');
        press(&mut app, 'h');
        assert_eq!(app.host.phase(), ToastPhase::FadingOut);
        assert_eq!(app.host.pending_timers(), 0);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(&AppConfig::default());
        assert_eq!(press(&mut app, 'q'), EventResult::Exit);
    }

    #[test]
    fn test_animations_follow_config() {
        let mut config = AppConfig::default();
        config.toast.enable_animations = false;
        assert!(App::new(&config).timings.is_none());
        assert_eq!(
            App::new(&AppConfig::default()).timings,
            Some(FadeTimings {
                fade_in_ms: 300,
                fade_out_ms: 400,
            })
        );
    }

    #[test]
    fn test_dismiss_then_render_removes_toast() {
        let mut config = AppConfig::default();
        config.toast.enable_animations = false;
        let clock = ManualClock::new();
        let mut app = App::with_host(&config, ToastHost::new(clock.clone()));
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        press(&mut app, 'b');
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(!app.deliver_animation_end());
        assert_eq!(app.host.phase(), ToastPhase::Visible);

        clock.advance(DEFAULT_DURATION);
        app.fire_dismiss_timers();
        assert_eq!(app.host.phase(), ToastPhase::FadingOut);

        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(app.deliver_animation_end());
        assert_eq!(app.host.phase(), ToastPhase::Absent);
        assert!(!app.deliver_animation_end());
    }

    #[test]
    fn test_dismiss_before_deadline_keeps_toast() {
        let clock = ManualClock::new();
        let mut app = App::with_host(&AppConfig::default(), ToastHost::new(clock.clone()));

        press(&mut app, 'b');
        clock.advance(DEFAULT_DURATION - Duration::from_millis(1));
        app.fire_dismiss_timers();

        assert_eq!(app.host.phase(), ToastPhase::Visible);
        assert_eq!(app.host.pending_timers(), 1);
    }

    #[tokio::test]
    async fn test_animation_interval_skips_missed_ticks() {
        let ticker = animation_interval();
        assert_eq!(ticker.missed_tick_behavior(), MissedTickBehavior::Skip);
        assert_eq!(ticker.period(), ANIMATION_TICK_RATE);
    }
}
