//! Terminal host loop: raw mode, 50ms event polling, dt-based ticking.

use coindash::constants::TICK_INTERVAL_MS;
use coindash::game::{Game, GameEvent, GameStatus};
use coindash::input::{map_key, GameInput};
use coindash::ui;
use coindash::ui::controls::TouchControls;
use coindash::ui::responsive::Viewport;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore the terminal even if the loop errored.
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let size = terminal.size()?;
    let mut viewport = Viewport::from_size(size.width, size.height);
    let mut game = Game::new(viewport.compact, &mut rng);
    let mut note: Option<String> = None;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &game, &viewport, note.as_deref()))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key_event) => {
                    if let Some(input) = map_key(key_event.code) {
                        if apply_input(&mut game, input, &mut rng, &mut note) {
                            break;
                        }
                    }
                }
                Event::Mouse(mouse_event) => {
                    // Clicks on the on-screen buttons act as moves; the
                    // buttons only exist in the compact layout.
                    if viewport.compact
                        && matches!(mouse_event.kind, MouseEventKind::Down(MouseButton::Left))
                    {
                        let area = terminal.size()?;
                        let controls = TouchControls::from_area(area);
                        if let Some(direction) = controls.hit(mouse_event.column, mouse_event.row)
                        {
                            let events = game.handle_move(direction);
                            update_note(&events, &mut note);
                        }
                    }
                }
                Event::Resize(cols, rows) => {
                    viewport = Viewport::from_size(cols, rows);
                    game.set_compact(viewport.compact);
                }
                _ => {}
            }
        }

        game.tick(last_tick.elapsed().as_millis() as u64);
        last_tick = Instant::now();
    }

    Ok(())
}

/// Dispatch one input action. Returns true when the player wants to quit.
fn apply_input<R: Rng>(
    game: &mut Game,
    input: GameInput,
    rng: &mut R,
    note: &mut Option<String>,
) -> bool {
    match input {
        GameInput::Quit => return true,
        GameInput::Move(direction) => {
            let events = game.handle_move(direction);
            update_note(&events, note);
        }
        GameInput::Jump => game.press_jump(),
        GameInput::TogglePause => game.toggle_pause(),
        GameInput::Confirm => match game.status {
            GameStatus::Over => {
                let events = game.restart(rng);
                update_note(&events, note);
            }
            GameStatus::Paused => game.toggle_pause(),
            GameStatus::Playing => {}
        },
    }
    false
}

fn update_note(events: &[GameEvent], note: &mut Option<String>) {
    if let Some(event) = events.last() {
        *note = Some(event_text(*event));
    }
}

fn event_text(event: GameEvent) -> String {
    use coindash::arena::PowerUpKind;

    match event {
        GameEvent::CoinCollected { value } => format!("+{} coin!", value),
        GameEvent::PowerUpCollected {
            kind: PowerUpKind::Invincibility,
        } => "Invincible!".to_string(),
        GameEvent::PowerUpCollected {
            kind: PowerUpKind::ExtraLife,
        } => "Extra life!".to_string(),
        GameEvent::LifeLost { remaining } => match remaining {
            0 => "Ouch! No lives left...".to_string(),
            1 => "Ouch! 1 life left".to_string(),
            n => format!("Ouch! {} lives left", n),
        },
        GameEvent::GameOver => "Game over!".to_string(),
        GameEvent::Restarted => "Fresh arena. Good luck!".to_string(),
    }
}
