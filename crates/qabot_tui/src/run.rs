//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on terminal
//! input. Replies from in-flight requests are drained from the controller each tick.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{debug, info};

use crate::controller::ChatController;
use crate::state::{ChatState, Screen};
use crate::view;

const TICK: Duration = Duration::from_millis(50);

/// What the loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the chat until the user quits. In-flight requests are cancelled on exit.
///
/// If `log_rx` is provided, tracing lines are pushed to the logs screen (Ctrl+D).
pub fn run_chat(
    controller: &mut ChatController,
    mut state: ChatState,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("chat started");
    let result = run_loop(&mut terminal, controller, &mut state, log_rx);
    controller.cancel_all();

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut ChatController,
    state: &mut ChatState,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(TICK).unwrap_or(false)
                && let Ok(ev) = event::read()
                && key_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    loop {
        // Multi-line log records become separate lines.
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_log_line(l.to_string());
                }
            }
        }
        controller.poll_replies(state);
        state.expire_status();

        if state.needs_redraw || state.pending > 0 {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        match key_rx.try_recv() {
            Ok(Event::Key(key)) => {
                if handle_key(controller, state, key) == Flow::Quit {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {
                state.cache_dirty = true;
                state.needs_redraw = true;
            }
            Ok(Event::Mouse(me)) => match (me.kind, state.screen) {
                (MouseEventKind::ScrollUp, Screen::Logs) => state.log_scroll_up(3),
                (MouseEventKind::ScrollDown, Screen::Logs) => state.log_scroll_down(3),
                (MouseEventKind::ScrollUp, Screen::Chat) => state.scroll_up(3),
                (MouseEventKind::ScrollDown, Screen::Chat) => state.scroll_down(3),
                _ => {}
            },
            Ok(_) => {}
            Err(_) => std::thread::sleep(TICK),
        }
    }
    Ok(())
}

/// Apply one key press. Release/repeat events are ignored.
pub fn handle_key(controller: &mut ChatController, state: &mut ChatState, key: KeyEvent) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let chat = state.screen == Screen::Chat;

    match key.code {
        KeyCode::Char('c') if ctrl => return Flow::Quit,
        KeyCode::Char('d') if ctrl => state.toggle_logs(),
        KeyCode::Esc if !chat => state.toggle_logs(),
        KeyCode::Up if !chat => state.log_scroll_up(1),
        KeyCode::Down if !chat => state.log_scroll_down(1),
        KeyCode::PageUp if !chat => state.log_scroll_up(10),
        KeyCode::PageDown if !chat => state.log_scroll_down(10),
        _ if !chat => {}
        KeyCode::Char('u') if ctrl => state.input_clear_line(),
        KeyCode::Char('k') if ctrl => state.input_kill_to_end(),
        KeyCode::Char('y') if ctrl => copy_last_answer(state),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => state.input_insert(c),
        KeyCode::Enter => {
            if let Some(id) = controller.on_send(state) {
                debug!(target: "qabot.trace", request = %id, "send");
            }
        }
        KeyCode::Backspace => state.input_backspace(),
        KeyCode::Delete => state.input_delete(),
        KeyCode::Left => state.input_cursor_left(),
        KeyCode::Right => state.input_cursor_right(),
        KeyCode::Home => state.input_cursor_home(),
        KeyCode::End => state.input_cursor_end(),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        KeyCode::PageUp => state.scroll_up(5),
        KeyCode::PageDown => state.scroll_down(5),
        _ => {}
    }
    Flow::Continue
}

/// Copy the newest bot answer to the system clipboard (Ctrl+Y).
fn copy_last_answer(state: &mut ChatState) {
    let Some(text) = state.last_bot_answer().map(str::to_string) else {
        return;
    };
    match cli_clipboard::set_contents(text) {
        Ok(()) => state.set_status("Copied answer"),
        Err(e) => {
            debug!(error = %e, "clipboard unavailable");
            state.set_status("Clipboard unavailable");
        }
    }
}
