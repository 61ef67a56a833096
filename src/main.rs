//! AnimIdManager: editor window for the animation ID catalog
//!
//! Usage: `anim-id-manager [ASSETS_DIR]`
//!
//! The catalog lives at `<ASSETS_DIR>/AnimIDManager/AnimIdInfo.json`. Without
//! an argument the assets directory comes from the user config file or the
//! `ANIM_ID_ASSETS_ROOT` environment variable (see `ToolConfig::resolve`).

mod editor;
mod ui;

use anim_id_manager::{CatalogSession, CatalogStore, LocalStorage, ToolConfig, VERSION};
use editor::{draw_anim_id_editor, EditorState};
use macroquad::prelude::*;
use std::path::PathBuf;
use ui::{MouseState, Rect, UiContext, BG_COLOR};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("AnimIdManager v{}", VERSION),
        window_width: 960,
        window_height: 640,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Work out the catalog location, falling back to built-in settings if the
/// config file is broken
fn load_config() -> ToolConfig {
    let cli_assets_root = std::env::args_os().nth(1).map(PathBuf::from);
    match ToolConfig::resolve(cli_assets_root.clone()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}, using built-in settings", e);
            ToolConfig::default().with_assets_root(cli_assets_root)
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("=== AnimIdManager v{} ===", VERSION);

    let config = load_config();
    let store = CatalogStore::new(LocalStorage::new(), config.catalog_path());
    let mut state = EditorState::new(CatalogSession::new(store));
    state.activate(get_time());

    let mut ui_ctx = UiContext::new();

    // Closing the window goes through the loop so the session is torn down
    prevent_quit();

    loop {
        if is_quit_requested() {
            state.deactivate();
            break;
        }

        ui_ctx.begin_frame(MouseState::capture());
        clear_background(BG_COLOR);

        let screen = Rect::screen(screen_width(), screen_height());
        draw_anim_id_editor(&mut ui_ctx, screen, &mut state, get_time());

        next_frame().await;
    }
}
