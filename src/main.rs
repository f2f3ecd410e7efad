use std::{env, fs::File, io::stdout, process};

use anyhow::Result;
use crossterm::{
    cursor::Hide,
    execute,
    terminal::{EnterAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use simplelog::{LevelFilter, WriteLogger};

use pixterm::cli::{CliCommand, USAGE, parse_args};
use pixterm::config::ViewerConfig;
use pixterm::event_source::KeyboardEventSource;
use pixterm::images::load_all;
use pixterm::panic_handler;
use pixterm::render::screen::CrosstermScreen;
use pixterm::session::Session;
use pixterm::viewer::run_viewer_with_event_source;

fn main() -> Result<()> {
    let args = match parse_args(env::args().skip(1)) {
        Ok(CliCommand::View(args)) => args,
        Ok(CliCommand::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            println!("pixterm {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(e) => {
            eprintln!("pixterm: {e}\n\n{USAGE}");
            process::exit(2);
        }
    };

    let mut config = match ViewerConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pixterm: {e}");
            process::exit(1);
        }
    };
    args.apply_to(&mut config);

    // Logging is best effort; a read-only directory should not stop the viewer
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(
            LevelFilter::Debug,
            simplelog::ConfigBuilder::new()
                .set_max_level(LevelFilter::Debug)
                .build(),
            log_file,
        );
    }

    info!("Starting pixterm with {} paths", args.paths.len());

    // All images are decoded up front; nothing can fail to load once the
    // viewer is running
    let images = match load_all(&args.paths) {
        Ok(images) => images,
        Err(e) => {
            error!("{e}");
            eprintln!("pixterm: {e}");
            process::exit(1);
        }
    };
    let mut session = match Session::new(
        images,
        config.navigation,
        config.show_status,
        config.background(),
    ) {
        Ok(session) => session,
        Err(e) => {
            error!("{e}");
            eprintln!("pixterm: {e}");
            process::exit(1);
        }
    };

    panic_handler::initialize_panic_handler();

    // Terminal initialization
    enable_raw_mode().map_err(|e| {
        error!("Failed to enable raw mode: {e}");
        anyhow::anyhow!(
            "Failed to initialize terminal: {e}\n\
             Make sure you are running pixterm in a terminal, not from a pipe or redirection."
        )
    })?;
    let mut stdout = stdout();

    execute!(stdout, EnterAlternateScreen, Hide).map_err(|e| {
        error!("Failed to setup terminal: {e}");
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to setup terminal: {e}")
    })?;

    let mut screen = CrosstermScreen::new(stdout);
    let mut event_source = KeyboardEventSource;
    let res = run_viewer_with_event_source(
        &mut screen,
        &mut session,
        &mut event_source,
        config.poll_interval(),
    );

    panic_handler::restore_terminal();

    if let Err(err) = res {
        error!("Viewer error: {err:?}");
        eprintln!("pixterm: {err:?}");
        process::exit(1);
    }

    info!("Shutting down pixterm");
    Ok(())
}
