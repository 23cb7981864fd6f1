mod engine;
mod export;
mod model;
mod render;
mod ui;

use engine::gemini_client::ClientConfig;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The credential is read once here and injected; nothing below this
    // point touches the process environment.
    let config = ClientConfig::new(std::env::var("GEMINI_API_KEY").ok());

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "MATATAG Lesson Plan Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::PlannerApp::new(config)))),
    )
}
