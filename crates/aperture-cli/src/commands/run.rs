use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use aperture_core::AppConfig;
use aperture_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
};

pub async fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Aperture"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: AppConfig) -> Result<()> {
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let size = terminal.size()?;
    let mut app = App::new(config, Rect::new(0, 0, size.width, size.height), Instant::now());
    info!("showcase started");

    // Main loop
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| aperture_tui::draw(frame, &app, now))?;

        // Poll faster while animating, otherwise wake for the next typewriter step
        let timeout = app.poll_timeout(Instant::now());
        if let Some(event) = event_handler.next_within(timeout)? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    app.apply_action(action, now);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::Resize(width, height) => {
                    app.resize(Rect::new(0, 0, width, height), now);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.shutdown();
    info!("showcase closed");
    Ok(())
}
