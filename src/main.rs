mod app;
mod cli;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gabor_orientation_game::config::AppConfig;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = cli::Args::parse();
    let config = AppConfig::load_or_default(&args.config);
    let seed = args
        .seed
        .or(config.session.seed)
        .unwrap_or_else(rand::random::<u64>);
    info!(seed, "starting session");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size)
            .with_min_inner_size(config.window.min_inner_size),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(app::GaborGameApp::new(cc, config, seed)))),
    )
}
