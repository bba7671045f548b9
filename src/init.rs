//! Initialization that needs to be done on startup

use env_logger::Env;

/// Sets up diagnostic logging. Only warnings are shown unless `RUST_LOG` says otherwise,
/// e.g. `RUST_LOG=debug canvasfit photo.jpg`.
pub fn init() {
    // a second initialization (e.g. from tests) is harmless, so the error is ignored
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
