// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-state")]
#[command(about = "Scene visual-state snapshot/restore exerciser", long_about = None)]
pub struct Cli {
    /// JSON scene description to load instead of the built-in building
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Number of save/perturb/restore cycles to run
    #[arg(long, default_value_t = 3)]
    pub cycles: usize,

    /// Walls in the built-in building scene
    #[arg(long, default_value_t = 8)]
    pub walls: usize,

    /// Suppress the console summary
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}
