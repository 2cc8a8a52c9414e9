// Block terrain: a height field drawn as coloured squares.
// • Enter starts (when launched with --paused), P pauses/resumes.
// • Space or R regenerates the terrain. ESC or closing the window quits.

mod app;
mod config;
mod draw;
mod error;
mod noise;
mod palette;
mod render;
mod terrain;
mod types;

use app::{LoopOptions, Session};
use clap::Parser;
use config::{Cli, NoiseKind, Settings, BLOCK_SIZE, HEIGHT, TITLE, WIDTH};
use draw::Drawer;
use error::Error;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Error> {
    let settings = Settings::from_cli(Cli::parse());
    let (cols, rows) = settings.grid_size();

    println!(
        "Terrain {cols}x{rows} cells, scale {}, seed {}, noise {:?}",
        settings.scale, settings.seed, settings.noise
    );
    if settings.noise == NoiseKind::Value {
        println!("Using coherent value noise (islands visible); default is uniform noise");
    }

    /* --- Terrain first, so a bad grid fails before a window pops up --- */
    let mut session = Session::new(cols, rows, settings.scale, settings.noise.build(settings.seed))?;

    /* --- Window --- */
    let mut drawer = Drawer::new(TITLE, WIDTH, HEIGHT)?;

    let opts = LoopOptions {
        block_size: BLOCK_SIZE,
        frame_delay: settings.frame_delay,
        start_paused: settings.start_paused,
        report_fps: true,
    };
    let frames = app::run(&mut drawer, &mut session, &opts)?;

    println!("Stopped after {frames} frames");
    Ok(())
}
