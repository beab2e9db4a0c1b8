use fractal_canvas::{AppResult, DrawingConfig};

/// Path to an optional JSON drawing config.
const CONFIG_ENV: &str = "FRACTAL_CANVAS_CONFIG";

fn main() -> AppResult<()> {
    env_logger::init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => DrawingConfig::load(path)?,
        None => DrawingConfig::default(),
    };

    fractal_canvas::run_app(config)
}
