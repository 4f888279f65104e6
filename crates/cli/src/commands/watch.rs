// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live dashboard.
//!
//! Keys are read on a dedicated thread and forwarded as [`Action`]s; fetch
//! outcomes arrive from the session's background tasks. The loop redraws the
//! whole screen after either kind of event.

use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{cursor, terminal, ExecutableCommand, QueueableCommand};
use rf_core::{ClockSource, FeedState};
use tokio::sync::mpsc;

use crate::colors;
use crate::config::Config;
use crate::display::{self, RenderOptions};
use crate::error::{Error, Result};
use crate::feed::{FeedSession, ReviewSource};

use super::{new_runtime, open_session};

/// How often the key thread checks whether it should stop.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Refresh,
    ToggleExpand,
    /// Terminal resized; nothing changes but the layout.
    Redraw,
    Quit,
}

/// Map a key press to an action.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Refresh),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::ToggleExpand),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Refresh,
    Redraw,
    Quit,
}

/// View settings that survive across frames.
#[derive(Debug, Clone)]
pub struct Dashboard {
    opts: RenderOptions,
}

impl Dashboard {
    pub fn new(opts: RenderOptions) -> Self {
        Dashboard { opts }
    }

    pub fn expanded(&self) -> bool {
        self.opts.expanded
    }

    pub fn apply(&mut self, action: Action) -> Step {
        match action {
            Action::Refresh => Step::Refresh,
            Action::ToggleExpand => {
                self.opts.expanded = !self.opts.expanded;
                Step::Redraw
            }
            Action::Redraw => Step::Redraw,
            Action::Quit => Step::Quit,
        }
    }

    /// Key hints shown under the table.
    pub fn hint(&self) -> String {
        let expand = if self.expanded() {
            "Collapse reviews"
        } else {
            "Expand reviews"
        };
        format!("r: Refresh  e: {}  q: Quit", expand)
    }

    /// The full screen for `state`, with raw-mode line endings.
    pub fn frame(&self, state: &FeedState) -> String {
        let hint = self.hint();
        let hint = if self.opts.color {
            colors::context(&hint)
        } else {
            hint
        };
        let body = format!("{}\n\n{}", display::render(state, &self.opts), hint);
        body.replace('\n', "\r\n")
    }
}

/// Raw mode plus the alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        // Constructed before the remaining steps so a failure still restores
        let guard = TerminalGuard;
        let mut stdout = io::stdout();
        stdout.execute(terminal::EnterAlternateScreen)?;
        stdout.execute(cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Forward key presses until `stop` is set or the receiver goes away.
fn spawn_key_reader(tx: mpsc::Sender<Action>, stop: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    let _ = tx.blocking_send(Action::Quit);
                    break;
                }
            }
            let action = match event::read() {
                Ok(Event::Key(key)) => key_action(key),
                Ok(Event::Resize(..)) => Some(Action::Redraw),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    Some(Action::Quit)
                }
            };
            if let Some(action) = action {
                if tx.blocking_send(action).is_err() || action == Action::Quit {
                    break;
                }
            }
        }
    })
}

fn draw(out: &mut impl Write, frame: &str) -> io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(Print(frame))?;
    out.flush()
}

/// Drive the dashboard until the user quits or input ends.
///
/// Starts with a refresh. Every action and every fetch outcome is followed by
/// a redraw, so a superseded outcome costs one identical frame.
pub async fn event_loop<S, C, W>(
    session: &mut FeedSession<S, C>,
    dashboard: &mut Dashboard,
    actions: &mut mpsc::Receiver<Action>,
    out: &mut W,
) -> Result<()>
where
    S: ReviewSource + ?Sized,
    C: ClockSource,
    W: Write,
{
    let generation = session.refresh();
    tracing::debug!(%generation, "initial refresh");
    draw(out, &dashboard.frame(session.state()))?;

    loop {
        tokio::select! {
            action = actions.recv() => {
                let Some(action) = action else { break };
                match dashboard.apply(action) {
                    Step::Quit => break,
                    Step::Refresh => {
                        let generation = session.refresh();
                        tracing::debug!(%generation, "manual refresh");
                    }
                    Step::Redraw => {}
                }
            }
            event = session.next_event() => {
                let Some(event) = event else { break };
                let commit = session.apply(event);
                tracing::debug!(?commit, "fetch outcome");
            }
        }
        draw(out, &dashboard.frame(session.state()))?;
    }
    Ok(())
}

/// Run the live dashboard in the current terminal.
pub fn run(config: &Config, expand: bool) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(Error::TtyRequired);
    }

    let runtime = new_runtime()?;
    let mut dashboard = Dashboard::new(RenderOptions::from_config(
        config,
        expand,
        colors::should_colorize(),
    ));
    let (tx, mut actions) = mpsc::channel(16);
    let stop = Arc::new(AtomicBool::new(false));

    let guard = TerminalGuard::enter()?;
    let reader = spawn_key_reader(tx, Arc::clone(&stop));

    let result = runtime.block_on(async {
        let mut session = open_session(config)?;
        event_loop(&mut session, &mut dashboard, &mut actions, &mut io::stdout()).await
    });

    stop.store(true, Ordering::Relaxed);
    drop(actions);
    let _ = reader.join();
    drop(guard);
    result
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
