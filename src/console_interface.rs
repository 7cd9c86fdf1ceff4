// Level notation: '#' wall, ' ' floor, '.' target, '$' box, '*' box on target,
// '@' player, '+' player on target.

use crate::core::Cell::{Box, BoxOnTarget, Floor, Player, Target, Wall};
use crate::core::{Cell, EngineError, Room, Vec2};
use crate::models::WatchRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn parse_level(s: &str) -> Result<Room, EngineError> {
    let mut fixed: Vec<Vec<Cell>> = Vec::new();
    let mut state: Vec<Vec<Cell>> = Vec::new();
    let mut player = None;
    let max_width = s.lines().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut i = 0;
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }

        let mut fixed_row = Vec::new();
        let mut state_row = Vec::new();
        for (j, ch) in line.chars().enumerate() {
            let (under, over) = match ch {
                '#' => (Wall, Wall),
                '.' => (Target, Target),
                '$' => (Floor, Box),
                '*' => (Target, BoxOnTarget),
                '@' => (Floor, Player),
                '+' => (Target, Player),
                _ => (Floor, Floor),
            };
            if over == Player {
                player = Some(Vec2 {
                    i: i as i32,
                    j: j as i32,
                });
            }
            fixed_row.push(under);
            state_row.push(over);
        }
        // Pad row to max width with Floor
        while fixed_row.len() < max_width {
            fixed_row.push(Floor);
            state_row.push(Floor);
        }
        fixed.push(fixed_row);
        state.push(state_row);
        i += 1;
    }

    let player = player.ok_or(EngineError::MissingPlayer)?;
    Room::new(fixed, state, player)
}

pub fn render_room_to_string(room: &Room) -> String {
    let mut result = String::new();
    for (dynamic_row, fixed_row) in room.state_grid().iter().zip(room.fixed_grid()) {
        for (&c, &under) in dynamic_row.iter().zip(fixed_row) {
            let ch = match c {
                Wall => '#',
                Floor => ' ',
                Target => '.',
                Box => '$',
                BoxOnTarget => '*',
                Player => if under == Target { '+' } else { '@' },
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, std::boxed::Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), std::boxed::Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_watch(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &WatchRenderState,
) -> Result<(), std::boxed::Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let room_paragraph = Paragraph::new(state.room_text.as_str())
            .block(Block::default().borders(Borders::ALL).title("Push & Pull Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(room_paragraph, chunks[0]);

        let mut status = format!(
            "Step {} | Reward {:+.2} | Total {:+.2}",
            state.step, state.reward, state.total_reward
        );
        if let Some(info) = &state.last_info {
            status = format!(
                "{} | Last: {} (player {}, box {})",
                status, info.action_name, info.moved_player, info.moved_box
            );
        }
        if state.done {
            status = format!("{} | Done, press any key to quit", status);
        } else {
            status = format!("{} | Q to quit", status);
        }

        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input(timeout: std::time::Duration) -> Result<ConsoleInput, std::boxed::Box<dyn std::error::Error>> {
    if event::poll(timeout)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
