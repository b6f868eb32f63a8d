use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (created with commented defaults if missing)
    #[arg(long, default_value = "gabor_game.toml")]
    pub config: String,

    /// Seed for the trial sequence (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}
