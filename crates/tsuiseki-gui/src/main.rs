mod app;
mod artwork;
mod screen;
mod style;
mod theme;
mod toast;
mod widgets;

use clap::Parser;

use tsuiseki_core::config::AppConfig;

/// Desktop client for the media tracking dashboard.
#[derive(Debug, Parser)]
#[command(name = "tsuiseki", version, about)]
struct Args {
    /// Base URL of the dashboard backend (overrides the config file).
    #[arg(long)]
    server: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> iced::Result {
    let args = Args::parse();

    let filter = if args.verbose {
        "tsuiseki=debug"
    } else {
        "tsuiseki=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(%e, "failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    tracing::info!(server = %config.server.base_url, "starting");

    iced::application(
        move || app::Tsuiseki::new(config.clone()),
        app::Tsuiseki::update,
        app::Tsuiseki::view,
    )
    .title(app::Tsuiseki::title)
    .theme(app::Tsuiseki::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(iced::window::Settings {
        size: iced::Size::new(1280.0, 800.0),
        position: iced::window::Position::Centered,
        ..Default::default()
    })
    .run()
}
