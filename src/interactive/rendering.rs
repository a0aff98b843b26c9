//! TUI rendering with ratatui

use super::app::App;
use crate::core::{GameSession, GameState, MAX_GUESSES, ScoredGuess, Statistics, Tag};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Banner text while a session is in progress
pub const IDLE_BANNER: &str = "WORDY";

/// Placeholder for unfilled input positions
const BLANK: char = '_';

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(3),                       // Status banner
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Min(0),
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_banner(f, &app.session, centered(chunks[1], banner_width(&app.session)));
    render_board(f, &app.session, centered(chunks[2], board_width(&app.session)));
    render_status(f, &app.stats, chunks[4]);
}

fn centered(area: Rect, width: u16) -> Rect {
    let [middle] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    middle
}

fn board_width(session: &GameSession) -> u16 {
    // Letters are spaced one apart, plus borders and padding
    (session.word_length() * 2 + 3) as u16
}

fn banner_width(session: &GameSession) -> u16 {
    (session.word_length().max(IDLE_BANNER.len()) + 6) as u16
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDY - guess the word in six tries")
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

/// Banner text and style for the session's state
///
/// The idle prompt while playing, `WINNER` on a win, the revealed secret on
/// a loss.
#[must_use]
pub fn banner(session: &GameSession) -> (String, Style) {
    match session.state() {
        GameState::InProgress => (IDLE_BANNER.to_string(), Style::default()),
        GameState::Won => (
            "WINNER".to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        GameState::Lost => (
            session.secret().text().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

fn render_banner(f: &mut Frame, session: &GameSession, area: Rect) {
    let (text, style) = banner(session);
    let paragraph = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

#[must_use]
pub fn tag_style(tag: Tag) -> Style {
    match tag {
        Tag::Exact => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tag::Present => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Tag::Absent => Style::default(),
    }
}

/// One styled span per letter of a submitted guess
#[must_use]
pub fn guess_line(guess: &ScoredGuess) -> Line<'static> {
    let spans: Vec<Span<'static>> = guess
        .letters()
        .map(|(c, tag)| Span::styled(c.to_string(), tag_style(tag)))
        .collect();
    spaced(spans)
}

/// The input buffer padded with blanks to `length`
#[must_use]
pub fn input_line(input: &str, length: usize) -> Line<'static> {
    let spans: Vec<Span<'static>> = input
        .chars()
        .chain(std::iter::repeat(BLANK))
        .take(length)
        .map(|c| Span::raw(c.to_string()))
        .collect();
    spaced(spans)
}

fn spaced(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut out = Vec::with_capacity(spans.len() * 2);
    for (i, span) in spans.into_iter().enumerate() {
        if i > 0 {
            out.push(Span::raw(" "));
        }
        out.push(span);
    }
    Line::from(out)
}

/// Board rows: guesses so far, the input row while playing, then one blank
/// row per unused attempt
#[must_use]
pub fn board_lines(session: &GameSession) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = session.guesses().iter().map(guess_line).collect();
    let mut blank_rows = session.remaining_attempts();
    if !session.is_finished() {
        lines.push(input_line(session.input(), session.word_length()));
        blank_rows = blank_rows.saturating_sub(1);
    }
    lines.extend(std::iter::repeat_n(Line::from(""), blank_rows));
    lines
}

fn render_board(f: &mut Frame, session: &GameSession, area: Rect) {
    let board = Paragraph::new(board_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} left ", session.remaining_attempts()))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_status(f: &mut Frame, stats: &Statistics, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    );
    let stats_widget = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Ctrl+R: New game | Esc/Ctrl+C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::interactive::app::GameEvent;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let words = WordList::load("crane\n", 5).unwrap();
        App::new(words, StdRng::seed_from_u64(0)).unwrap()
    }

    fn play(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_event(GameEvent::CharPressed(c)).unwrap();
        }
        app.handle_event(GameEvent::Enter).unwrap();
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn input_line_pads_with_blanks() {
        assert_eq!(line_text(&input_line("cr", 5)), "c r _ _ _");
        assert_eq!(line_text(&input_line("", 5)), "_ _ _ _ _");
        assert_eq!(line_text(&input_line("crane", 5)), "c r a n e");
    }

    #[test]
    fn guess_line_colours_by_tag() {
        let secret = Word::new("caper").unwrap();
        let guess = ScoredGuess::new(Word::new("crane").unwrap(), &secret);
        let line = guess_line(&guess);

        assert_eq!(line_text(&line), "c r a n e");
        // Letters sit at even span indices, separators at odd ones
        assert_eq!(line.spans[0].style.fg, Some(Color::Green));
        assert_eq!(line.spans[2].style.fg, Some(Color::Yellow));
        assert_eq!(line.spans[6].style.fg, None);
    }

    #[test]
    fn board_always_has_max_rows() {
        let mut app = app();
        assert_eq!(board_lines(&app.session).len(), MAX_GUESSES);
        play(&mut app, "slate");
        let lines = board_lines(&app.session);
        assert_eq!(lines.len(), MAX_GUESSES);
        assert_eq!(line_text(&lines[1]), "_ _ _ _ _");
    }

    #[test]
    fn banner_follows_state() {
        let mut app = app();
        assert_eq!(banner(&app.session).0, IDLE_BANNER);

        play(&mut app, "crane");
        let (text, style) = banner(&app.session);
        assert_eq!(text, "WINNER");
        assert_eq!(style.fg, Some(Color::Green));
    }

    #[test]
    fn renders_winner() {
        let mut app = app();
        play(&mut app, "crane");
        let screen = screen(&app);
        assert!(screen.contains("WINNER"));
        assert!(screen.contains("Games: 1 | Won: 1"));
    }

    #[test]
    fn renders_secret_on_loss() {
        let mut app = app();
        for _ in 0..MAX_GUESSES {
            play(&mut app, "slate");
        }
        let (text, style) = banner(&app.session);
        assert_eq!(text, "crane");
        assert_eq!(style.fg, Some(Color::Red));
        assert!(screen(&app).contains("crane"));
    }

    #[test]
    fn renders_idle_screen() {
        let app = app();
        let screen = screen(&app);
        assert!(screen.contains(IDLE_BANNER));
        assert!(screen.contains("_ _ _ _ _"));
    }

    #[test]
    fn board_title_counts_down_attempts() {
        let mut app = app();
        assert!(screen(&app).contains(" 6 left "));
        play(&mut app, "slate");
        play(&mut app, "moist");
        assert!(screen(&app).contains(" 4 left "));
    }

    #[test]
    fn early_win_pads_with_unused_attempts() {
        let mut app = app();
        play(&mut app, "slate");
        play(&mut app, "crane");
        let lines = board_lines(&app.session);
        assert_eq!(lines.len(), MAX_GUESSES);
        assert_eq!(line_text(&lines[1]), "c r a n e");
        assert!(lines[2..].iter().all(|l| line_text(l).is_empty()));
    }
}
