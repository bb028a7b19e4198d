//! Gomoku on an 8x8 board
//!
//! Opens the egui window by default; `--console` plays in the terminal.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::cli::Cli;
use gomoku::console;
use gomoku::ui::GomokuApp;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut session = cli.session().context("could not start the game")?;
    let mut advisor = cli.advisor();

    if cli.console {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        console::print_banner(&mut out)?;
        let input = io::stdin().lock();
        let status = console::run(&mut session, &mut advisor, input, &mut out, &cli.save_file)?;
        info!(?status, "console game finished");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    let save_path = cli.save_file.clone();
    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, session, advisor, save_path)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
