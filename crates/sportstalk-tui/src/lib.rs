//! sportstalk-tui: Terminal UI for the sportstalk chat client
//!
//! This crate provides the TUI layer for sportstalk, including:
//! - The chat screen (transcript, message box, key hints)
//! - Background answer requests that keep the UI responsive
//! - Headless mode for testing and automation

mod app;
pub mod conversation;
mod event;
pub mod headless;
mod request;
mod screens;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod widgets;

use screens::Screen as ScreenTrait;

pub use app::App;
pub use event::{Action, Event, EventHandler};
pub use sportstalk_engine;
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use request::RequestSlot;
use sportstalk_engine::AnswerService;
use std::io::{self, stdout};
use std::sync::Arc;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(
    service: Arc<dyn AnswerService>,
    theme: Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(theme);

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    info!("chat session started");
    let result = run_loop(&mut terminal, &mut app, &mut events, &service).await;
    info!(messages = app.conversation.len(), "chat session ended");

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    service: &Arc<dyn AnswerService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut requests = RequestSlot::new();

    loop {
        terminal.draw(|frame| draw(app, frame))?;

        // Handle events
        if let Some(event) = events.next().await {
            let action = match event {
                Event::Key(key) => event::key_to_action(key),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => Action::ScrollUp,
                    MouseEventKind::ScrollDown => Action::ScrollDown,
                    _ => Action::None,
                },
                // Terminal will handle resize automatically
                Event::Tick | Event::Resize(_, _) => Action::None,
            };
            apply_action(app, action, &mut requests, service);
        }

        // Check for a completed answer (non-blocking)
        if let Some(outcome) = requests.poll().await {
            app.apply_outcome(outcome);
        }

        if app.should_quit {
            if requests.is_active() {
                info!("abandoning outstanding answer request");
            }
            requests.abort();
            break;
        }
    }

    Ok(())
}

/// Render the app into a frame.
///
/// The scroll position is clamped first so it never points past the
/// oldest line at the current size.
pub(crate) fn draw(app: &mut App, frame: &mut Frame<'_>) {
    let area = frame.area();
    let max_back = screens::chat::ChatScreen::max_scroll(app, area);
    app.scroll.clamp(max_back);
    screens::chat::ChatScreen.render(app, area, frame.buffer_mut());
}

/// Apply an action, dispatching a request if it submitted a question.
pub(crate) fn apply_action(
    app: &mut App,
    action: Action,
    requests: &mut RequestSlot,
    service: &Arc<dyn AnswerService>,
) {
    if let Some(turn) = app.handle_action(action) {
        requests.dispatch(service, turn);
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

/// Flow tests that drive the app through actions and the request slot.
#[cfg(test)]
mod flow_tests {
    use super::*;
    use crate::test_utils::{
        buffer_to_string, create_test_app, create_test_app_with_exchange, ScriptedService,
    };
    use ratatui::backend::TestBackend;
    use sportstalk_engine::FALLBACK_ANSWER;
    use std::time::Duration;

    async fn settle(app: &mut App, requests: &mut RequestSlot) {
        for _ in 0..200 {
            if let Some(outcome) = requests.poll().await {
                app.apply_outcome(outcome);
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("request never finished");
    }

    fn send(app: &mut App, requests: &mut RequestSlot, service: &Arc<dyn AnswerService>, text: &str) {
        for c in text.chars() {
            apply_action(app, Action::Insert(c), requests, service);
        }
        apply_action(app, Action::Submit, requests, service);
    }

    #[tokio::test]
    async fn test_submit_dispatches_one_request() {
        let scripted = Arc::new(ScriptedService::new([Some("Seven")]));
        let service: Arc<dyn AnswerService> = scripted.clone();
        let mut app = create_test_app();
        let mut requests = RequestSlot::new();

        send(&mut app, &mut requests, &service, "Who?");
        assert!(requests.is_active());
        assert!(app.is_pending());

        // Rejected while pending: nothing new is dispatched
        send(&mut app, &mut requests, &service, "again");
        settle(&mut app, &mut requests).await;

        assert_eq!(scripted.questions(), vec!["\nWho?".to_string()]);
        assert_eq!(app.conversation.len(), 2);
        assert_eq!(app.input.content(), "again");
    }

    #[tokio::test]
    async fn test_failed_request_keeps_session_usable() {
        let scripted = Arc::new(ScriptedService::new([None, Some("ok")]));
        let service: Arc<dyn AnswerService> = scripted.clone();
        let mut app = create_test_app();
        let mut requests = RequestSlot::new();

        send(&mut app, &mut requests, &service, "first");
        settle(&mut app, &mut requests).await;
        assert_eq!(app.conversation.messages()[1].content, FALLBACK_ANSWER);

        send(&mut app, &mut requests, &service, "second");
        settle(&mut app, &mut requests).await;
        assert_eq!(app.conversation.messages()[3].content, "ok");

        let ids: Vec<u64> = app.conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            scripted.questions()[1],
            format!("first\n{FALLBACK_ANSWER}\nsecond")
        );
    }

    #[test]
    fn test_page_down_after_overscroll_moves_view() {
        let mut app = create_test_app_with_exchange();
        let mut terminal = Terminal::new(TestBackend::new(66, 9)).unwrap();

        for _ in 0..10 {
            app.handle_action(Action::PageUp);
            terminal.draw(|frame| draw(&mut app, frame)).unwrap();
        }
        assert_eq!(app.scroll.lines_back(), 2);
        let screen = buffer_to_string(terminal.backend().buffer());
        assert!(screen.contains("Who has the most rings?"));

        app.handle_action(Action::PageDown);
        terminal.draw(|frame| draw(&mut app, frame)).unwrap();
        assert!(app.scroll.is_following());
        let screen = buffer_to_string(terminal.backend().buffer());
        assert!(!screen.contains("Who has the most rings?"));
        assert!(screen.contains("Tom Brady, with seven."));
    }
}
