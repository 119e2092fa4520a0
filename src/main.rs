//! `pinwall` command line: settle a gallery and report its layout.

use std::path::{Path, PathBuf};

use pinwall::camera::CameraPose;
use pinwall::gallery::{Gallery, GalleryConfig};
use pinwall::options::Options;
use pinwall::store::JsonFileStore;

/// Simulated frame rate used to settle transitions.
const SETTLE_FPS: u32 = 60;

fn load_options(path: Option<&Path>) -> Result<Options, pinwall::error::PinwallError> {
    match path {
        Some(path) => Options::load(path),
        None => Ok(Options::default()),
    }
}

fn open_store(path: PathBuf) -> JsonFileStore {
    match JsonFileStore::open(&path) {
        Ok(store) => store,
        Err(e) => {
            log::warn!("Starting with an empty position store: {e}");
            JsonFileStore::empty(path)
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(gallery_path) = args.next().map(PathBuf::from) else {
        log::error!("Usage: pinwall <gallery.toml> [positions.json] [options.toml]");
        std::process::exit(1);
    };
    let store_path = args
        .next()
        .map_or_else(|| PathBuf::from("positions.json"), PathBuf::from);
    let options_path = args.next().map(PathBuf::from);

    let options = match load_options(options_path.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let config = match GalleryConfig::load(&gallery_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut gallery = match Gallery::compose(&config, open_store(store_path), &options) {
        Ok(gallery) => gallery,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let camera: CameraPose = options.camera.pose(16.0 / 9.0);
    let dt = 1.0 / SETTLE_FPS as f32;
    for _ in 0..SETTLE_FPS {
        gallery.update(dt, &camera);
    }

    if let Some(size) = gallery.backdrop().plane_size(&camera) {
        log::info!("backdrop: {:.3} x {:.3}", size.x, size.y);
    }
    for item in gallery.items() {
        log::info!(
            "{} ({}): rest {} state {:?}",
            item.id(),
            item.image(),
            item.rest_position(),
            item.state()
        );
    }
    for t in gallery.transforms() {
        log::debug!(
            "{}: position {} scale {:.3} order {}",
            t.id,
            t.position,
            t.scale,
            t.render_order
        );
    }

    if let Err(e) = gallery.store_mut().flush() {
        log::error!("Failed to save positions: {e}");
        std::process::exit(1);
    }
}
