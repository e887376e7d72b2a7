// What you SEE:
// • A circle grows out of the window center, then snaps back to a dot.
// • A right triangle grows while jumping to a random spot every frame.
// • 300 random-colored pixels get sprinkled on top each frame.
// • Nothing is ever cleared, so the window slowly fills with trails.
// • Close the window to quit. RUST_LOG=debug shows resizes and resets.

mod anim;
mod config;
mod draw;
mod error;
mod frame_loop;
mod surface;
mod types;

use clap::Parser;
use config::Config;
use error::Error;
use frame_loop::FrameLoop;
use surface::{Drawer, Surface};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    log::info!(
        "starting {}x{} window, seed {}",
        config.width,
        config.height,
        config.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    /* --- Window setup ---
       Visual: an empty black window opens. Failure here is fatal. */
    let mut drawer = Drawer::new(&config.title, config.width, config.height)
        .inspect_err(|e| log::error!("{e}"))?;

    /* ------------------------------ Main loop ------------------------------ */
    let mut frame_loop = FrameLoop::new(drawer.buffer_mut(), config.rng());
    frame_loop.run(&mut drawer)?;
    log::info!("stopped after {} frames", frame_loop.frames());

    Ok(())
}
