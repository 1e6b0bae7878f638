//! storefront - Themeable Terminal Storefront
//!
//! A small storefront for showcasing swappable visual themes.
//!
//! Features:
//! - Home page with products from a public catalog
//! - About and Contact pages
//! - Three themes, one of them with a sidebar layout
//! - The selected theme is remembered between runs
//!
//! Usage: storefront [--help] [--version] [--page <home|about|contact>]

mod app;
mod catalog;
mod config;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use catalog::HttpCatalog;
use config::{load_settings, Config};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::{self, File};
use std::io::stdout;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "STOREFRONT_LOG";

/// How long to wait for input before redrawing
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("storefront {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging();

    if let Err(e) = run_app(start_page(&args)) {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"storefront - Themeable Terminal Storefront

USAGE:
    storefront [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information
    -p, --page <ID>  Open on a page: home, about or contact
                     (unknown ids open the home page)

KEYBINDINGS:
    1-3 / h a c      Switch pages
    Tab / S-Tab      Next / previous page
    t                Cycle theme
    F1-F3            Select theme
    j/k              Scroll products (Home)
    Enter            Fill in the form (Contact)
    Esc              Leave the form
    q                Quit

PAGES:
    [1] Home         Products from the catalog
    [2] About        About the store
    [3] Contact      Contact form

THEMES:
    Light, Dark Sidebar, Colorful

CONFIG:
    ~/.config/storefront/config.toml

LOGGING:
    Set STOREFRONT_LOG (e.g. "storefront=debug") to adjust the log file filter.
"#
    );
}

/// Write logs to a file under the cache dir so the TUI stays intact
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("storefront")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("storefront.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("storefront=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Page id given with `--page`, if any
fn start_page(args: &[String]) -> Option<&str> {
    args.iter()
        .position(|a| a == "--page" || a == "-p")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn run_app(start_page: Option<&str>) -> Result<()> {
    let (config, store) = load_settings(Config::path());
    tracing::info!("Catalog endpoint: {}", config.catalog.url);

    let source = Arc::new(HttpCatalog::new(config.catalog.url));
    let mut app = App::new(store, source);
    if let Some(id) = start_page {
        app.navigate_to_id(id);
    }

    install_panic_hook();
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen).context("Failed to setup terminal")?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| main_loop(&mut terminal, &mut app));

    restore_terminal().context("Failed to restore terminal")?;
    result
}

/// Leave raw mode and the alternate screen
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut out = stdout();
    execute!(out, LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// Restore the terminal before the default hook reports a panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        tracing::error!("{}", info);
        default_hook(info);
    }));
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.poll_fetch();
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(key) = next_key_press(TICK)? {
            app.handle_key(key);
        }
    }
    Ok(())
}

/// Wait up to `timeout` for a key press; other events are dropped
fn next_key_press(timeout: Duration) -> Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_start_page_flag() {
        let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(start_page(&args(&["storefront"])), None);
        assert_eq!(start_page(&args(&["storefront", "--page", "about"])), Some("about"));
        assert_eq!(start_page(&args(&["storefront", "-p", "contact"])), Some("contact"));
        assert_eq!(start_page(&args(&["storefront", "--page"])), None);
    }
}
