mod app;
mod components;
mod screens;
mod shortcuts;
mod theme;
mod utils;

use launchpad_app_core::AppCommand;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let (w, h) = launchpad_config::WINDOW_SIZE;
    let (min_w, min_h) = launchpad_config::MIN_WINDOW_SIZE;
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([w, h])
            .with_min_inner_size([min_w, min_h])
            .with_title("LAUNCHPAD"),
        ..Default::default()
    };

    eframe::run_native(
        "LaunchPad",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let mut core = launchpad_app_core::desktop_kernel();
            core.dispatch(AppCommand::LoadInitialState);

            Ok(Box::new(app::LaunchpadApp::new(core)))
        }),
    )
}
