use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ephemera::core::constants::FRAME_INTERVAL_MS;
use ephemera::core::{GatePhase, RoundEngine};
use ephemera::ui;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut engine = RoundEngine::new(&mut rng);
    let mut die_face: usize = 0;

    loop {
        // Advance the gate; tumble the die while it rolls
        engine.tick(&mut rng);
        if matches!(engine.phase(), GatePhase::Rolling { .. }) {
            die_face = rng.gen_range(0..6);
        }

        terminal.draw(|f| ui::draw(f, &engine, die_face))?;

        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if engine.is_game_over() {
                            engine.restart(&mut rng);
                        }
                    }
                    KeyCode::Char(' ') => engine.continue_round(&mut rng),
                    KeyCode::Char('1') => engine.choose(0, &mut rng),
                    KeyCode::Char('2') => engine.choose(1, &mut rng),
                    KeyCode::Char('3') => engine.choose(2, &mut rng),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    Ok(())
}
