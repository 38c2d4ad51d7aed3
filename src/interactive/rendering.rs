//! TUI rendering with ratatui
//!
//! Word board, letter keyboard and action bar for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Letter, MAX_WRONG_GUESSES, Verdict};
use crate::output::formatters::{hint_label, masked_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Word and clue
            Constraint::Length(5), // Keyboard
            Constraint::Min(5),    // Messages and counters
            Constraint::Length(3), // Actions
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_word(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Messages
            Constraint::Percentage(40), // Wrong guesses
        ])
        .split(chunks[3]);

    render_messages(f, app, middle[0]);
    render_wrong_guesses(f, app, middle[1]);
    render_actions(f, app, chunks[4]);
    render_status(f, app, chunks[5]);

    if let InputMode::GameOver { lost } = app.input_mode {
        render_game_over(f, lost.word.text());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD GUESS GAME")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let entry = app.game.active();

    let mut content = vec![
        Line::from(Span::styled(
            masked_word(&entry.word, app.game.revealed()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("Hint: ", Style::default().fg(Color::Cyan)),
            Span::raw(entry.description.as_str()),
        ]),
    ];

    if let Some(verdict) = app.game.verdict() {
        let color = match verdict {
            Verdict::Solved => Color::Green,
            Verdict::NotYet => Color::Red,
        };
        content.push(Line::from(Span::styled(
            verdict.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let word = &app.game.active().word;

    let key = |letter: Letter| {
        let style = if !app.game.is_chosen(letter) {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if word.has_letter(letter) {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
        };
        Span::styled(format!(" {letter} "), style)
    };

    let letters: Vec<Letter> = Letter::alphabet().collect();
    let rows: Vec<Line> = letters
        .chunks(13)
        .map(|row| Line::from(row.iter().map(|&l| key(l)).collect::<Vec<_>>()))
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_wrong_guesses(f: &mut Frame, app: &App, area: Rect) {
    let wrong = app.game.wrong_guesses();
    let ratio = f64::from(wrong) / f64::from(MAX_WRONG_GUESSES);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Wrong Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(ratio.min(1.0))
        .label(format!("Wrong Guesses: {wrong} / {MAX_WRONG_GUESSES}"));

    f.render_widget(gauge, area);
}

fn render_actions(f: &mut Frame, app: &App, area: Rect) {
    let has_choices = app.game.has_choices();
    let has_hints = app.game.hints_remaining() > 0;

    let action = |key: &str, label: String, enabled: bool| {
        let style = if enabled {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![
            Span::styled(format!("[{key}] "), style.add_modifier(Modifier::BOLD)),
            Span::styled(label, style),
            Span::raw("   "),
        ]
    };

    let spans: Vec<Span> = [
        action("Esc", "Restart".to_string(), true),
        action("Bksp", "Undo".to_string(), has_choices),
        action("Tab", hint_label(&app.game), has_hints),
        action("Enter", "Guess".to_string(), has_choices),
    ]
    .into_iter()
    .flatten()
    .collect();

    let actions = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(actions, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Solved: {} | Lost: {}",
        app.stats.rounds_played, app.stats.rounds_solved, app.stats.games_lost
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("a-z: Choose | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_game_over(f: &mut Frame, word: &str) {
    let area = centered_rect(f.area(), 50, 7);

    let content = vec![
        Line::from(Span::styled(
            "Game Over! You made too many wrong guesses.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                word.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
