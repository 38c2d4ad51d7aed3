//! TUI application state and logic

use crate::core::{Game, Guess, Letter, MAX_WRONG_GUESSES, Verdict, WordEntry};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub input_mode: InputMode<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    solved_counted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode<'a> {
    Playing,
    /// Blocking notice after a loss; the game underneath has already restarted
    GameOver { lost: &'a WordEntry },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// In-session counters; nothing is persisted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_solved: usize,
    pub games_lost: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        Self {
            game,
            input_mode: InputMode::Playing,
            messages: vec![Message {
                text: "Type letters to guess the word. Tab for a hint.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            solved_counted: false,
        }
    }

    pub fn select_letter(&mut self, letter: Letter) {
        match self.game.select_letter(letter) {
            Guess::AlreadyChosen => {}
            Guess::Hit => {
                self.add_message(&format!("{letter} is in the word"), MessageStyle::Success);
            }
            Guess::Miss => {
                self.add_message(
                    &format!(
                        "{letter} is not in the word ({}/{MAX_WRONG_GUESSES})",
                        self.game.wrong_guesses()
                    ),
                    MessageStyle::Error,
                );
            }
            Guess::GameOver { lost } => {
                self.stats.games_lost += 1;
                self.start_round();
                self.input_mode = InputMode::GameOver { lost };
            }
        }
    }

    pub fn use_hint(&mut self) {
        if let Some(letter) = self.game.use_hint() {
            self.add_message(&format!("Hint revealed {letter}"), MessageStyle::Info);
        } else if self.game.hints_remaining() == 0 {
            self.add_message("No hints left!", MessageStyle::Error);
        }
    }

    pub fn undo_last(&mut self) {
        if let Some(letter) = self.game.undo_last_guess() {
            self.add_message(&format!("Removed {letter}"), MessageStyle::Info);
        }
    }

    pub fn guess(&mut self) {
        if !self.game.has_choices() {
            return;
        }
        if self.game.evaluate_guess() == Verdict::Solved && !self.solved_counted {
            self.stats.rounds_solved += 1;
            self.solved_counted = true;
        }
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.start_round();
        self.add_message("New word chosen!", MessageStyle::Info);
    }

    fn start_round(&mut self) {
        self.stats.rounds_played += 1;
        self.solved_counted = false;
        self.messages.clear();
    }

    pub fn acknowledge_game_over(&mut self) {
        self.input_mode = InputMode::Playing;
        self.add_message("New word chosen!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(key.code, KeyCode::Char('c' | 'q')) {
                self.should_quit = true;
            }
            return;
        }

        match self.input_mode {
            InputMode::GameOver { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.acknowledge_game_over();
                }
            }
            InputMode::Playing => match key.code {
                KeyCode::Char(c) => {
                    if let Ok(letter) = Letter::new(c) {
                        self.select_letter(letter);
                    }
                }
                KeyCode::Enter => self.guess(),
                KeyCode::Backspace => self.undo_last(),
                KeyCode::Tab => self.use_hint(),
                KeyCode::Esc => self.restart(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
