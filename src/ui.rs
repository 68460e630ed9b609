//! Terminal rendering. Reads engine snapshots only; all mutation goes
//! through the engine's signal methods in `main.rs`.

use crate::core::constants::LOG_PANEL_LINES;
use crate::core::{GatePhase, RoundEngine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DIE_FACES: [&str; 6] = ["\u{2680}", "\u{2681}", "\u{2682}", "\u{2683}", "\u{2684}", "\u{2685}"];

/// Draws the whole screen. `die_face` (0-5) is the face shown while the
/// gate is rolling; the caller re-randomizes it each frame.
pub fn draw(f: &mut Frame, engine: &RoundEngine, die_face: usize) {
    let area = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),                        // Title
            Constraint::Length(6),                        // Status panel
            Constraint::Min(9),                           // Event panel
            Constraint::Length(LOG_PANEL_LINES as u16 + 2), // History log
            Constraint::Length(1),                        // Controls
        ])
        .split(area);

    let title = Paragraph::new("Ephemera \u{2014} Short-Lived Species Survival")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    draw_status(f, chunks[1], engine);

    if engine.is_game_over() {
        draw_game_over(f, chunks[2], engine);
    } else {
        draw_event(f, chunks[2], engine, die_face);
    }

    draw_log(f, chunks[3], engine);
    draw_controls(f, chunks[4], engine);
}

fn draw_status(f: &mut Frame, area: Rect, engine: &RoundEngine) {
    let species = engine.species();
    let traits = if species.traits.is_empty() {
        "none".to_string()
    } else {
        species
            .traits
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let shelter = if species.shelter { " (sheltered)" } else { "" };

    let lines = vec![
        Line::from(format!(
            "Generation {}  |  Round {}/{}",
            species.generation,
            species.round,
            crate::core::constants::MAX_ROUNDS
        )),
        Line::from(format!("Population: {}{}", species.population, shelter)),
        Line::from(format!("Food stores: {}", species.food)),
        Line::from(format!("Traits: {}", traits)),
    ];

    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Blue))
        .block(Block::default().borders(Borders::ALL).title(" Species "));
    f.render_widget(status, area);
}

fn draw_event(f: &mut Frame, area: Rect, engine: &RoundEngine, die_face: usize) {
    let mut lines = Vec::new();

    if let Some(event) = engine.current_event() {
        lines.push(Line::from(Span::styled(
            event.title,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(event.description));
        lines.push(Line::from(""));

        match engine.phase() {
            GatePhase::Rolling { .. } => {
                lines.push(Line::from(Span::styled(
                    format!("  {}  Rolling the die...", DIE_FACES[die_face % 6]),
                    Style::default().fg(Color::Yellow),
                )));
            }
            GatePhase::ChoicesRevealed => {
                for (i, (label, _)) in event.choices.iter().enumerate() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}. {}", i + 1, label),
                        Style::default().fg(Color::Green),
                    )));
                }
            }
            GatePhase::AutoResolved => {
                if let Some(outcome) = engine.last_outcome() {
                    lines.push(Line::from(Span::styled(
                        outcome.to_string(),
                        Style::default().fg(Color::Blue),
                    )));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Press Space to continue...",
                    Style::default().fg(Color::Yellow),
                )));
            }
            GatePhase::Idle => {}
        }
    }

    let event_panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Event "));
    f.render_widget(event_panel, area);
}

fn draw_game_over(f: &mut Frame, area: Rect, engine: &RoundEngine) {
    let species = engine.species();

    let (headline, color) = if engine.is_victory() {
        ("Victory! The species survived ten generations!", Color::Green)
    } else {
        ("Game over \u{2014} the species has gone extinct", Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Final generation: {}", species.generation)),
        Line::from(format!("Final population: {}", species.population)),
        Line::from(format!("Traits evolved: {}", species.traits.len())),
        Line::from(""),
        Line::from(Span::styled(
            "Press R to restart | Q to quit",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn draw_log(f: &mut Frame, area: Rect, engine: &RoundEngine) {
    // Full log is append-only; the panel shows the tail
    let log = engine.log();
    let start = log.len().saturating_sub(LOG_PANEL_LINES);
    let lines: Vec<Line> = log[start..]
        .iter()
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(" History "));
    f.render_widget(panel, area);
}

fn draw_controls(f: &mut Frame, area: Rect, engine: &RoundEngine) {
    let hint = if engine.is_game_over() {
        "[R] restart  [Q] quit"
    } else {
        match engine.phase() {
            GatePhase::ChoicesRevealed => "[1-3] choose  [Q] quit",
            GatePhase::AutoResolved => "[Space] continue  [Q] quit",
            _ => "[Q] quit",
        }
    };
    let controls = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(controls, area);
}
