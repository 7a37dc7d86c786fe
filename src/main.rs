// src/main.rs
use std::env;
use std::process::ExitCode;

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use movierec::app::MovieRecApp;
use movierec::config::load_config;

const APP_TITLE: &str = "Movie Recommendation Finder";

fn pick_renderer() -> eframe::Renderer {
    match env::var("MOVIEREC_RENDERER").as_deref() {
        Ok("glow") => eframe::Renderer::Glow,
        Ok("wgpu") => eframe::Renderer::Wgpu,
        _ => {
            // Default: Windows = WGPU (DX12), Others = Glow (GL)
            #[cfg(target_os = "windows")]
            {
                eframe::Renderer::Wgpu
            }
            #[cfg(not(target_os = "windows"))]
            {
                eframe::Renderer::Glow
            }
        }
    }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    #[cfg(target_os = "linux")]
    {
        info!("XDG_SESSION_TYPE={:?}", env::var_os("XDG_SESSION_TYPE"));
        info!("WAYLAND_DISPLAY={:?}", env::var_os("WAYLAND_DISPLAY"));
        info!("DISPLAY={:?}", env::var_os("DISPLAY"));
    }

    // Missing credential is fatal before any window opens.
    let cfg = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let app = match MovieRecApp::new(&cfg) {
        Ok(app) => app,
        Err(e) => {
            error!("startup failed: {e}");
            eprintln!("startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        renderer: pick_renderer(),
        multisampling: 0,
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1000.0, 650.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    match eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("eframe failed to start: {e:?}");
            error!("Hint: on WSL use X/Wayland; try MOVIEREC_RENDERER=wgpu or glow.");
            ExitCode::FAILURE
        }
    }
}
