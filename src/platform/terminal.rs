//! Terminal frontend
//!
//! Each board cell is drawn two characters wide so the grid looks square.
//! Logs go to stderr; redirect it (`2>snake.log`) to keep the screen clean.

use std::io::{self, Stdout, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use super::Command;
use crate::consts::*;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{Board, Snapshot};

const SNAKE_GLYPH: &str = "██";
const APPLE_GLYPH: &str = "()";
const EMPTY_GLYPH: &str = "  ";
const GAME_OVER_TEXT: &str = " Game Over ";
const HELP_TEXT: &str = "W/A/S/D steer  Up/Down speed  Esc quit";

/// Raw mode + alternate screen for as long as it lives
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let mut stdout = stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// Translate a crossterm key into the shared bindings. Ctrl-C quits.
fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char(c) => Command::from_key(c.encode_utf8(&mut [0; 4])),
        KeyCode::Up => Command::from_key("ArrowUp"),
        KeyCode::Down => Command::from_key("ArrowDown"),
        KeyCode::Esc => Command::from_key("Escape"),
        _ => None,
    }
}

/// Play one session until the player quits
pub fn run(settings: &Settings) -> io::Result<()> {
    let mut session = Session::new(settings);
    let mut guard = TerminalGuard::enter()?;
    let out = &mut guard.stdout;

    draw_border(out, &session.board())?;
    draw_frame(out, &session.snapshot(), session.interval().ms())?;

    let mut last = Instant::now();
    loop {
        let wait = Duration::from_secs_f64(session.until_next_tick() / 1000.0);
        match event::poll(wait) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(command) = command_for(&key) {
                        if !command.apply(&mut session) {
                            log::info!("Quit requested");
                            break;
                        }
                        // Speed shows in the status line right away
                        draw_status(out, &session.snapshot(), session.interval().ms())?;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    queue!(out, terminal::Clear(ClearType::All))?;
                    draw_border(out, &session.board())?;
                    draw_frame(out, &session.snapshot(), session.interval().ms())?;
                }
                Ok(_) => {}
                Err(e) => log::warn!("Failed to read terminal event: {e}"),
            },
            Ok(false) => {}
            // Interrupted waits are not fatal; keep ticking
            Err(e) => log::warn!("Interrupted while waiting for input: {e}"),
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_secs_f64() * 1000.0;
        last = now;

        if let Some(snapshot) = session.update(elapsed_ms) {
            draw_frame(out, &snapshot, session.interval().ms())?;
        }
    }

    Ok(())
}

fn draw_border(out: &mut Stdout, board: &Board) -> io::Result<()> {
    let inner = (board.columns() * 2) as u16;
    let rows = board.rows() as u16;
    let horizontal = format!("+{}+", "-".repeat(inner as usize));

    queue!(out, ResetColor, cursor::MoveTo(0, 0), Print(&horizontal))?;
    for y in 1..=rows {
        queue!(
            out,
            cursor::MoveTo(0, y),
            Print('|'),
            cursor::MoveTo(inner + 1, y),
            Print('|')
        )?;
    }
    queue!(out, cursor::MoveTo(0, rows + 1), Print(&horizontal))?;
    out.flush()
}

fn draw_frame(out: &mut Stdout, snapshot: &Snapshot, interval_ms: u32) -> io::Result<()> {
    let board = &snapshot.board;
    let (cols, rows) = (board.columns(), board.rows());

    // Row-major glyph grid, later entries win
    let mut grid = vec![EMPTY_GLYPH; (cols * rows) as usize];
    let mut put = |cell: glam::IVec2, glyph| {
        let at = board.to_grid(cell);
        if (0..cols).contains(&at.x) && (0..rows).contains(&at.y) {
            grid[(at.y * cols + at.x) as usize] = glyph;
        }
    };
    put(snapshot.apple, APPLE_GLYPH);
    for &segment in &snapshot.segments {
        put(segment, SNAKE_GLYPH);
    }

    for row in 0..rows {
        queue!(out, cursor::MoveTo(1, row as u16 + 1))?;
        for col in 0..cols {
            let glyph = grid[(row * cols + col) as usize];
            let color = match glyph {
                SNAKE_GLYPH => rgb(SNAKE_COLOR),
                APPLE_GLYPH => rgb(APPLE_COLOR),
                _ => Color::Reset,
            };
            queue!(out, SetForegroundColor(color), Print(glyph))?;
        }
    }

    if snapshot.is_over() {
        let x = (cols as u16 * 2 + 2).saturating_sub(GAME_OVER_TEXT.len() as u16) / 2;
        queue!(
            out,
            cursor::MoveTo(x, rows as u16 / 2 + 1),
            SetForegroundColor(rgb(SNAKE_COLOR)),
            Print(GAME_OVER_TEXT)
        )?;
    }

    draw_status(out, snapshot, interval_ms)
}

fn draw_status(out: &mut Stdout, snapshot: &Snapshot, interval_ms: u32) -> io::Result<()> {
    let y = snapshot.board.rows() as u16 + 2;
    let state = if snapshot.is_over() { "Game Over" } else { "Running" };
    queue!(
        out,
        ResetColor,
        cursor::MoveTo(0, y),
        terminal::Clear(ClearType::CurrentLine),
        Print(format!(
            "Length {}  Tick {} ms  {}",
            snapshot.segments.len(),
            interval_ms,
            state
        )),
        cursor::MoveTo(0, y + 1),
        terminal::Clear(ClearType::CurrentLine),
        Print(HELP_TEXT)
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Heading;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_command_for_keys() {
        assert_eq!(
            command_for(&press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Command::Steer(Heading::Left))
        );
        assert_eq!(
            command_for(&press(KeyCode::Up, KeyModifiers::NONE)),
            Some(Command::SpeedUp)
        );
        assert_eq!(
            command_for(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for(&press(KeyCode::Left, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Char('w'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for(&key), None);
    }
}
