//! tintshell - a themed shell TUI
//!
//! A single-screen shell with a light/dark mode toggle, a tab strip inside a
//! vertically resizable panel, and (in the vivid variant) a palette card.
//!
//! The display mode starts from the host color-scheme preference and flips
//! on demand; the whole theme is re-derived from the mode on every toggle.
//!
//! Usage: tintshell [--variant <name>] [--light|--dark] [--print-theme]

mod app;
mod config;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use types::{DisplayMode, Variant};
use ui::Theme;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("tintshell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let result = parse_args(&args).and_then(run);

    // Always try to restore terminal state, even on error
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"tintshell - a themed shell TUI

USAGE:
    tintshell [OPTIONS]

OPTIONS:
    --variant <NAME>    Palette variant: classic, harvest, vivid
    --light             Start in light mode, ignoring the host preference
    --dark              Start in dark mode, ignoring the host preference
    --print-theme       Print the derived palette as JSON and exit
    -h, --help          Print help information
    -v, --version       Print version information

KEYBINDINGS:
    t / Space        Toggle light/dark mode (or click the header glyph)
    1-3, ←/→, Tab    Select tab
    +/-              Resize the panel (or drag its bottom border)
    v                Cycle palette variant
    q / Esc          Quit

CONFIG:
    ~/.config/tintshell/config.toml
"#
    );
}

/// Parsed command line options.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    variant: Option<Variant>,
    mode: Option<DisplayMode>,
    print_theme: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--variant" => {
                let name = iter
                    .next()
                    .context("--variant requires a value (classic, harvest, vivid)")?;
                let variant = Variant::from_name(name)
                    .with_context(|| format!("Unknown variant {:?}", name))?;
                cli.variant = Some(variant);
            }
            "--light" => cli.mode = Some(DisplayMode::Light),
            "--dark" => cli.mode = Some(DisplayMode::Dark),
            "--print-theme" => cli.print_theme = true,
            other => anyhow::bail!("Unknown argument {:?} (see --help)", other),
        }
    }

    Ok(cli)
}

fn run(cli: CliArgs) -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Resolve variant and initial mode: CLI > config > host preference
    let variant = cli.variant.unwrap_or(config.variant);
    let prefers_dark = matches!(dark_light::detect(), dark_light::Mode::Dark);
    let mode = cli
        .mode
        .unwrap_or_else(|| config.mode.resolve(prefers_dark));

    if cli.print_theme {
        return print_theme(variant, mode);
    }

    let mut app = App::new(variant, mode, config.panel.height);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Print the derived palette for a variant/mode pair as JSON.
fn print_theme(variant: Variant, mode: DisplayMode) -> Result<()> {
    let theme = Theme::derive(variant, mode);
    let output = serde_json::json!({
        "variant": variant.as_str(),
        "palette": theme,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize theme")?
    );
    Ok(())
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI, remembering the frame area for event hit-testing
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            ui::render(frame, app);
        })?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, area);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, area),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
