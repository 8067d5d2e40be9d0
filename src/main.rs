use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use soilwatch::config::Settings;
use soilwatch::{events, export_pass, run_scheduled, ui};
use soilwatch::{App, DashboardConfig, Driver, FileSource, LogTarget};

#[derive(Parser, Debug)]
#[command(name = "soilwatch")]
#[command(about = "Terminal dashboard for soil telemetry written as line-delimited JSON")]
struct Args {
    /// Path to the line-delimited readings file [default: processed_data.json]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Refresh interval in seconds [default: 3]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    refresh: Option<u64>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fail the pass on an incomplete trailing line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Log each pass instead of drawing the terminal dashboard
    #[arg(long, conflicts_with = "export")]
    headless: bool,

    /// Stop after this many passes (headless only)
    #[arg(long, requires = "headless")]
    passes: Option<u64>,

    /// Export one pass to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of file and environment settings.
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(ref file) = self.file {
            settings.data_file = file.clone();
        }
        if let Some(refresh) = self.refresh {
            settings.refresh_secs = refresh;
        }
        if let Some(ref log_file) = self.log_file {
            settings.log_file = Some(log_file.clone());
        }
        if self.strict {
            settings.skip_incomplete_tail = false;
        }
        settings
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.apply(Settings::load(args.config.as_deref())?);

    init_tracing(&settings, args.headless)?;

    let source = FileSource::new(&settings.data_file)
        .skip_incomplete_tail(settings.skip_incomplete_tail);
    let driver = Driver::new(Box::new(source), DashboardConfig::default());

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return export_to_file(&driver, export_path);
    }

    if args.headless {
        return run_headless(&driver, settings.refresh_interval(), args.passes);
    }

    run_tui(driver, settings.refresh_interval())
}

/// Set up logging.
///
/// The terminal UI owns stdout, so without a log file nothing is logged
/// there. Headless runs log to stderr.
fn init_tracing(settings: &Settings, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    if let Some(ref path) = settings.log_file {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

/// Run the polling loop without a terminal UI
fn run_headless(driver: &Driver, refresh: Duration, passes: Option<u64>) -> Result<()> {
    // One thread: each pass finishes before the delay starts
    let rt = tokio::runtime::Builder::new_current_thread().enable_time().build()?;

    let mut target = LogTarget::new();
    let ran = rt.block_on(run_scheduled(driver, &mut target, refresh, passes))?;
    info!(passes = ran, "Stopped");
    Ok(())
}

/// Run the TUI with the given driver
fn run_tui(driver: Driver, refresh_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    info!(source = driver.source_description(), "Starting dashboard");
    let mut app = App::new(driver, refresh_interval);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // A pass runs to completion before the next frame; the interval
        // counts from when it finished
        if app.refresh_due() {
            app.refresh()?;
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(Event::Key(key)) = events::poll_event(Duration::from_millis(100))? {
            events::handle_key_event(app, key);
        }
    }

    Ok(())
}

/// Export one pass to a JSON file
fn export_to_file(driver: &Driver, export_path: &Path) -> Result<()> {
    let outcome = export_pass(driver, export_path)?;
    println!(
        "Exported {} state to: {}",
        outcome.label(),
        export_path.display()
    );
    Ok(())
}
