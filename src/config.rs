// config.rs - Command-line configuration
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-drawer")]
#[command(about = "Draws growing circles, hopping triangles and random pixels into a window", long_about = None)]
pub struct Config {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Window title
    #[arg(long, default_value = "Pixel Drawer")]
    pub title: String,

    /// Seed for the random generator; omit for a different animation every run
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
