use screen_watermark::gui::{native_options, WatermarkApp};
use screen_watermark::logging;
use screen_watermark::settings::{resolve_settings_path, Settings};

use anyhow::anyhow;

fn main() -> anyhow::Result<()> {
    let settings_path = resolve_settings_path()?;
    let settings = Settings::load(&settings_path)?;
    logging::init(settings.debug_logging, settings.log_file_path());
    tracing::info!(path = %settings_path.display(), "starting screen watermark");

    eframe::run_native(
        "Screen Watermark",
        native_options(),
        Box::new(move |_cc| Box::new(WatermarkApp::new(settings, settings_path))),
    )
    .map_err(|err| anyhow!("settings window failed: {err}"))?;

    tracing::info!("screen watermark exited");
    Ok(())
}
