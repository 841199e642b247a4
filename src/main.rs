//! Harvester terminal runner (default binary).
//!
//! Interactive only: no arguments, no flags. Reads keys from stdin, writes
//! ANSI frames to stdout, and logs diagnostics to a file because the terminal
//! itself is busy showing the game.

use std::fs::OpenOptions;
use std::io::{self, BufRead};

use anyhow::Result;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use harvester_tui::engine::GameLoop;
use harvester_tui::sim::DemoScene;
use harvester_tui::term::{install_panic_hook, Session, TerminalRenderer};

fn main() -> Result<()> {
    init_logging()?;
    install_panic_hook();

    println!("Harvester (terminal mode)");
    println!("W = thrust, S = brake, A/D = turn, Q or Esc quits");
    println!("Press Enter to start...");
    io::stdin().lock().read_line(&mut String::new())?;

    let mut session = Session::enter()?;
    let viewport = session.viewport();

    let scene = DemoScene::new(viewport.cols, viewport.rows);
    let mut renderer = TerminalRenderer::new();
    let mut game = GameLoop::new(scene, viewport);

    let result = game.run(&mut renderer);

    // Always restore the terminal before saying goodbye.
    session.leave();
    println!("Thanks for playing Harvester!");
    result
}

fn init_logging() -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("harvester-tui.log")?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)?;
    Ok(())
}
