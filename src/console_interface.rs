use crate::core::{CellKind, GridDirection, GridPos, HexDirection, IsoDirection, LevelGrid, Topology};
use crate::config::TileCodes;
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

// Tiles: '#' hole, '_' ground, '.' destination, '@' hero, '+' hero on destination,
// '$' ball, '*' ball on destination.
pub fn glyph_for(kind: CellKind) -> char {
    match kind {
        CellKind::Invalid => '#',
        CellKind::Ground => '_',
        CellKind::Destination => '.',
        CellKind::Hero => '@',
        CellKind::HeroOnDestination => '+',
        CellKind::Ball => '$',
        CellKind::BallOnDestination => '*',
    }
}

pub fn kind_for_glyph(glyph: char) -> Option<CellKind> {
    Some(match glyph {
        '#' => CellKind::Invalid,
        '_' => CellKind::Ground,
        '.' => CellKind::Destination,
        '@' => CellKind::Hero,
        '+' => CellKind::HeroOnDestination,
        '$' => CellKind::Ball,
        '*' => CellKind::BallOnDestination,
        _ => return None,
    })
}

/// Converts a glyph drawing into comma separated level text. Whitespace is ignored so
/// hexagonal drawings may indent their odd rows. Unknown glyphs become holes.
pub fn level_text_from_glyphs(glyphs: &str, codes: &TileCodes) -> String {
    let mut result = String::new();
    for line in glyphs.lines() {
        let tokens: Vec<String> = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| codes.code_for(kind_for_glyph(c).unwrap_or(CellKind::Invalid)).to_string())
            .collect();
        if tokens.is_empty() {
            continue;
        }
        result.push_str(&tokens.join(","));
        result.push('\n');
    }
    result
}

/// Hexagonal boards separate cells with a space and indent odd rows by one column,
/// which is where the odd rows sit relative to their even neighbours.
pub fn render_level_to_string(level: &LevelGrid, topology: Topology) -> String {
    let hexagonal = topology == Topology::Hexagonal;
    let mut result = String::new();
    for i in 0..level.rows() {
        if hexagonal && i % 2 == 1 {
            result.push(' ');
        }
        for j in 0..level.cols() {
            if hexagonal && j > 0 {
                result.push(' ');
            }
            let kind = level.get_kind(GridPos::new(i, j)).unwrap_or(CellKind::Invalid);
            result.push(glyph_for(kind));
        }
        result.push('\n');
    }
    result
}

/// Keyboard layout for a topology's directions
pub trait KeyBindings: GridDirection {
    const CONTROLS: &'static str;

    fn from_key(code: KeyCode) -> Option<Self>;
}

impl KeyBindings for IsoDirection {
    const CONTROLS: &'static str = "Controls: WASD or Arrow keys to move, Q to quit";

    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(IsoDirection::Up),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(IsoDirection::Right),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(IsoDirection::Down),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(IsoDirection::Left),
            _ => None,
        }
    }
}

impl KeyBindings for HexDirection {
    const CONTROLS: &'static str = "Controls: E D X Z A W move NE E SE SW W NW, Q to quit";

    fn from_key(code: KeyCode) -> Option<Self> {
        let KeyCode::Char(c) = code else {
            return None;
        };
        match c.to_ascii_lowercase() {
            'e' => Some(HexDirection::NorthEast),
            'd' => Some(HexDirection::East),
            'x' => Some(HexDirection::SouthEast),
            'z' => Some(HexDirection::SouthWest),
            'a' => Some(HexDirection::West),
            'w' => Some(HexDirection::NorthWest),
            _ => None,
        }
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
    controls: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(state.board.as_str())
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            format!("Level complete in {} moves! Press any key to quit.", state.moves_made)
        } else {
            format!("{} | Moves: {}", controls, state.moves_made)
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | {}", instructions, err)
        } else {
            instructions
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput<D> {
    Move(D),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input<D: KeyBindings>() -> Result<ConsoleInput<D>, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                other => match D::from_key(other) {
                    Some(direction) => ConsoleInput::Move(direction),
                    None => ConsoleInput::Unknown,
                },
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
