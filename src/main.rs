//! Glidecam demo viewer binary.

use std::path::Path;

use glidecam::{Options, Viewer};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("Loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let viewer = Viewer::builder()
        .with_options(options)
        .with_title("Glidecam")
        .build();

    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
