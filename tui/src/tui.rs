//! The terminal frontend.
//!
//! Paints the grid on the alternate screen, advances the world once per
//! tick, and listens for a few keys: `r` or space randomizes the grid
//! again, `q` or escape quits.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use rcellauto_lib::{State, World};
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Colors for painting the two cell states.
#[derive(Clone, Copy)]
struct Colors {
    alive: Color,
    dead: Color,
}

/// Runs the world under the TUI until the user quits.
pub(crate) fn run(world: World, period: Duration, alive: Color, dead: Color) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = event_loop(&mut stdout, world, period, Colors { alive, dead });
    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(
    stdout: &mut io::Stdout,
    mut world: World,
    period: Duration,
    colors: Colors,
) -> io::Result<()> {
    draw(stdout, &world, colors)?;
    let mut next_tick = Instant::now() + period;
    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if poll(timeout)? {
            match read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('r') | KeyCode::Char(' ') => {
                        world.randomize();
                        draw(stdout, &world, colors)?;
                    }
                    _ => (),
                },
                Event::Resize(..) => draw(stdout, &world, colors)?,
                _ => (),
            }
        } else {
            world.step();
            next_tick += period;
            draw(stdout, &world, colors)?;
        }
    }
    Ok(())
}

/// Paints the whole grid and the status line.
///
/// Each cell is two terminal columns wide, so cells come out roughly
/// square.
fn draw(stdout: &mut io::Stdout, world: &World, colors: Colors) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All))?;
    for y in 0..world.height() {
        queue!(stdout, MoveTo(0, y as u16))?;
        for &state in world.row(y) {
            let color = match state {
                State::Alive => colors.alive,
                State::Dead => colors.dead,
            };
            queue!(stdout, SetBackgroundColor(color), Print("  "))?;
        }
    }
    queue!(
        stdout,
        ResetColor,
        MoveTo(0, world.height() as u16),
        Print(format!(
            "{}  gen: {}  cells: {}  [r]andomize [q]uit",
            world.rule(),
            world.generation(),
            world.cell_count()
        ))
    )?;
    stdout.flush()
}
