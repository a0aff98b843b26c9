//! TUI application state and logic

use crate::core::{GameSession, GameState, Statistics};
use crate::wordlists::{WordList, WordSourceError, pick_secret};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info, trace};

/// Discrete inputs the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CharPressed(char),
    Backspace,
    Enter,
    Reset,
    Quit,
}

/// Map a terminal key to a game event
///
/// Only key presses count; repeats and releases are dropped.
#[must_use]
pub fn event_from_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(GameEvent::Quit),
        KeyCode::Char('r') if ctrl => Some(GameEvent::Reset),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(GameEvent::CharPressed(c.to_ascii_lowercase()))
        }
        KeyCode::Backspace => Some(GameEvent::Backspace),
        KeyCode::Enter => Some(GameEvent::Enter),
        KeyCode::Esc => Some(GameEvent::Quit),
        _ => None,
    }
}

/// Application state
pub struct App {
    pub words: WordList,
    pub session: GameSession,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    /// Start the first session with a secret drawn from `words`
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` if there is nothing to pick from.
    pub fn new(words: WordList, mut rng: StdRng) -> Result<Self, WordSourceError> {
        info!(
            words = words.len(),
            length = words.word_length(),
            "word pool ready"
        );
        let session = new_session(&words, &mut rng)?;
        Ok(Self {
            words,
            session,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        })
    }

    /// Apply one event to the current session
    ///
    /// # Errors
    ///
    /// Only `Reset` can fail, when no secret can be picked.
    pub fn handle_event(&mut self, event: GameEvent) -> Result<(), WordSourceError> {
        match event {
            GameEvent::CharPressed(c) => {
                self.session.append_char(c);
            }
            GameEvent::Backspace => {
                self.session.delete_char();
            }
            GameEvent::Enter => self.submit(),
            GameEvent::Reset => self.reset()?,
            GameEvent::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Replace the session wholesale with a fresh secret
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` if there is nothing to pick from.
    pub fn reset(&mut self) -> Result<(), WordSourceError> {
        info!(
            abandoned = !self.session.is_finished(),
            guesses = self.session.guesses().len(),
            "reset"
        );
        self.session = new_session(&self.words, &mut self.rng)?;
        Ok(())
    }

    fn submit(&mut self) {
        let Some(submission) = self.session.submit_guess() else {
            return;
        };
        debug!(
            guess = submission.guess.word().text(),
            feedback = %submission.guess.to_emoji(),
            attempt = self.session.guesses().len(),
            state = ?submission.state,
            "guess submitted"
        );

        if submission.state != GameState::InProgress {
            self.stats.record(&self.session);
            info!(
                state = ?submission.state,
                guesses = self.session.guesses().len(),
                played = self.stats.games_played,
                won = self.stats.games_won,
                "session finished"
            );
        }
    }
}

fn new_session(words: &WordList, rng: &mut StdRng) -> Result<GameSession, WordSourceError> {
    let secret = pick_secret(words, rng)?.clone();
    info!(length = secret.len(), "new session");
    trace!(secret = secret.text(), "secret chosen");
    Ok(GameSession::new(secret))
}

/// Run the TUI application
///
/// Returns the app as it stood when the player quit, for the exit summary.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        return first_error(Err(err.into()), vec![disable_raw_mode()]);
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let steps = vec![
                disable_raw_mode(),
                execute!(io::stdout(), LeaveAlternateScreen),
            ];
            return first_error(Err(err.into()), steps);
        }
    };

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    let mut steps = vec![disable_raw_mode()];
    steps.push(execute!(terminal.backend_mut(), LeaveAlternateScreen));
    steps.push(terminal.show_cursor());
    first_error(res, steps)
}

/// Combine a result with restore steps that have all already run
///
/// The result's own error wins, then the first failing step.
fn first_error<T>(res: Result<T>, steps: Vec<io::Result<()>>) -> Result<T> {
    let restored = steps.into_iter().collect::<io::Result<Vec<()>>>();
    let value = res?;
    restored?;
    Ok(value)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()?
            && let Some(game_event) = event_from_key(key)
        {
            app.handle_event(game_event)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
