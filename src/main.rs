use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use learngame_tui::{
    draw, handle_key, handle_paste, logger, spawn_upload_worker, App, Config, HttpMaterialSource,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let config = Config::parse();
    logger::init();
    logger::log(&format!("Starting, upload url {}", config.upload_url()));

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let source = Arc::new(HttpMaterialSource::new(config.upload_url()));
    let _worker = spawn_upload_worker(source, response_tx, request_rx)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.save_dir.clone(), Some(request_tx));
    if let Some(file) = &config.file {
        app.start_upload(file);
    }

    let result = run(&mut terminal, &mut app, &response_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    responses: &mpsc::Receiver<learngame_tui::UploadResponse>,
) -> io::Result<()> {
    let mut tick: usize = 0;

    loop {
        terminal.draw(|f| draw(f, app, tick))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let mut out = io::stdout();
                    handle_key(app, key, &mut out);
                }
                Event::Paste(text) => handle_paste(app, &text),
                _ => {}
            }
        }

        while let Ok(response) = responses.try_recv() {
            app.handle_upload_response(response);
        }
        app.notifier.expire(Instant::now());
        tick = tick.wrapping_add(1);

        if app.should_quit {
            return Ok(());
        }
    }
}
