mod config;
mod controller;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::{load_settings, LoadedSettings};
use crate::controller::events::UiError;
use crate::ui::{theme, ChefApp};

#[derive(Parser, Debug)]
#[command(about = "Browse the menu and add dishes from the chef's station")]
struct Args {
    #[arg(long, default_value = "chef_app.toml")]
    config: PathBuf,
    /// Start with the showcase menu already entered.
    #[arg(long)]
    seed_demo: bool,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let (loaded, startup_notice) = match load_settings(&args.config) {
        Ok(loaded) => (loaded, None),
        Err(err) => (
            LoadedSettings::default(),
            Some(UiError::from_config_error(&err)),
        ),
    };
    let settings = loaded.settings;

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for ignored in &loaded.ignored {
        tracing::warn!("ignored setting: {ignored}");
    }
    if let Some(notice) = &startup_notice {
        tracing::error!(config = %args.config.display(), "{}", notice.message());
    }

    let seed_demo = args.seed_demo || settings.seed_demo;
    let text_scale = settings.text_scale;
    tracing::info!(
        config = %args.config.display(),
        seed_demo,
        "starting chef app"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx, text_scale);
            Ok(Box::new(ChefApp::new(seed_demo, startup_notice)))
        }),
    )
}
