#![allow(non_snake_case)]
mod i18n;
mod shop;
mod theme;
mod app;
mod ui;

use dioxus::prelude::*;
use dioxus::desktop::{Config, WindowBuilder};
use std::path::PathBuf;
use std::fs;
use directories::BaseDirs;
use tracing_subscriber::EnvFilter;

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(base_dirs) = BaseDirs::new() {
        let mut path = PathBuf::from(base_dirs.config_dir());
        path.push("cafeamicus");
        path.push("cafeamicus.conf");
        Some(path)
    } else {
        None
    }
}

pub fn load_theme_preference() -> String {
    if let Some(config_path) = get_config_path() {
        if let Ok(content) = fs::read_to_string(&config_path) {
            return content.lines().next().map_or("", |s| s.trim()).to_string();
        }
    }

    String::new()
}

pub fn save_theme_preference(theme_name: &str) -> Result<(), String> {
    if let Some(config_path) = get_config_path() {
        if let Some(parent_dir) = config_path.parent() {
            if let Err(e) = fs::create_dir_all(parent_dir) {
                return Err(format!("Could not create the config directory: {}", e));
            }
        }
        fs::write(&config_path, theme_name)
            .map_err(|e| format!("Could not save the theme preference: {}", e))
    } else {
        Err("Config directory could not be determined".to_string())
    }
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() {
    setup_tracing();
    tracing::info!("starting CafeAmicus");

    let custom_head = r#"
        <style>
            @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');

            :root {
                --bg-base: #1e1e2e;
                --bg-sidebar: #181825;
                --bg-header: #11111b;
                --bg-surface: #313244;
                --bg-hover: #45475a;
                --text-main: #cdd6f4;
                --text-sub: #a6adc8;
                --accent-primary: #fab387;
                --border-color: #45475a;
            }

            [data-theme="light-theme"] {
                --bg-base: #eff1f5;
                --bg-sidebar: #e6e9ef;
                --bg-header: #dce0e8;
                --bg-surface: #ccd0da;
                --bg-hover: #bcc0cc;
                --text-main: #4c4f69;
                --text-sub: #6c6f85;
                --accent-primary: #fe640b;
                --border-color: #bcc0cc;
            }

            html, body {
                margin: 0; padding: 0; overflow: hidden; height: 100%; user-select: none;
                font-family: 'Inter', sans-serif;
            }

            .app-root {
                display: flex; flex-direction: column; width: 100vw; height: 100vh; overflow: hidden;
                background-color: var(--bg-base); color: var(--text-main);
                transition: background-color 0.2s, color 0.2s;
            }

            .title-bar {
                display: flex; justify-content: space-between; align-items: center; height: 38px;
                background: var(--bg-header); border-bottom: 1px solid var(--border-color); flex-shrink: 0;
                -webkit-app-region: drag;
            }
            .title-section-left {
                flex: 1; display: flex; align-items: center; padding-left: 15px;
                font-weight: 700; color: var(--text-main); font-size: 0.9em; letter-spacing: 0.5px;
            }
            .title-section-center { flex: 1; display: flex; justify-content: center; align-items: center; height: 100%; }
            .title-section-center .tagline { font-size: 0.8em; color: var(--text-sub); }
            .title-section-right { flex: 1; display: flex; justify-content: flex-end; height: 100%; align-items: center; -webkit-app-region: no-drag; }

            .cart-badge {
                font-size: 0.85em; color: var(--text-main); background: var(--bg-surface);
                padding: 3px 10px; border-radius: 12px; margin-right: 10px; white-space: nowrap;
            }

            .theme-toggle {
                width: 32px; height: 32px; display: flex; align-items: center; justify-content: center;
                cursor: pointer; border-radius: 6px; color: var(--text-main); font-size: 1.1em;
                transition: background 0.2s; margin-right: 6px;
            }
            .theme-toggle:hover { background: var(--bg-surface); }

            .window-controls { display: flex; height: 100%; -webkit-app-region: no-drag; }
            .control-btn {
                width: 46px; display: flex; align-items: center; justify-content: center;
                cursor: pointer; transition: background 0.2s; height: 100%;
                color: var(--text-sub); font-family: sans-serif; font-size: 0.9em;
            }
            .control-btn:hover { background: var(--bg-surface); color: var(--text-main); }
            .control-btn.close:hover { background: #e81123; color: white; }

            .content { display: flex; flex: 1; overflow: hidden; min-height: 0; }

            .storefront { flex: 1; overflow-y: auto; padding: 20px 25px; }
            .storefront-heading { margin: 0 0 18px 0; font-size: 1.3em; color: var(--text-main); }

            .coffee-grid {
                display: grid; grid-template-columns: repeat(auto-fill, minmax(230px, 1fr)); gap: 20px;
            }

            .coffee-card {
                background: var(--bg-sidebar); border: 1px solid var(--border-color); border-radius: 10px;
                padding: 16px; display: flex; flex-direction: column; align-items: center; text-align: center;
            }
            .coffee-image { width: 96px; height: 96px; object-fit: contain; margin-top: -36px; }
            .coffee-tags { display: flex; gap: 6px; margin-top: 10px; flex-wrap: wrap; justify-content: center; }
            .coffee-tag {
                font-size: 0.65em; font-weight: 700; text-transform: uppercase; letter-spacing: 0.5px;
                color: var(--accent-primary); background: var(--bg-surface); padding: 3px 8px; border-radius: 10px;
            }
            .coffee-name { font-size: 1.1em; margin: 12px 0 6px 0; }
            .coffee-description { font-size: 0.8em; color: var(--text-sub); margin: 0 0 14px 0; min-height: 2.6em; }

            .buy-row { display: flex; align-items: center; justify-content: space-between; width: 100%; gap: 10px; }
            .coffee-price { display: flex; align-items: baseline; gap: 3px; }
            .coffee-price .currency { font-size: 0.75em; color: var(--text-sub); }
            .coffee-price .price-value { font-size: 1.2em; font-weight: 700; }

            .buy-actions { display: flex; align-items: center; gap: 6px; }
            .stepper-btn {
                width: 26px; height: 26px; border: 1px solid var(--border-color); border-radius: 6px;
                background: var(--bg-surface); color: var(--accent-primary); cursor: pointer;
                font-size: 1em; line-height: 1; transition: background 0.2s;
            }
            .stepper-btn:hover:enabled { background: var(--bg-hover); }
            .stepper-btn:disabled { opacity: 0.35; cursor: default; }
            .stepper-value { min-width: 20px; text-align: center; font-weight: 600; }
            .btn-buy {
                width: 32px; height: 26px; border: none; border-radius: 6px; cursor: pointer;
                background: var(--accent-primary); color: var(--bg-base); font-size: 0.9em;
            }
            .btn-buy:hover { filter: brightness(1.1); }

            .stock-badge { font-size: 0.7em; color: var(--text-sub); margin-top: 10px; align-self: flex-end; }

            .cart-panel {
                width: 300px; background: var(--bg-sidebar); border-left: 1px solid var(--border-color);
                display: flex; flex-direction: column; overflow-y: auto; flex-shrink: 0;
            }
            .workspace-header {
                padding: 12px 15px 8px 15px;
                font-size: 0.75em; font-weight: 700; color: var(--text-sub);
                text-transform: uppercase; letter-spacing: 0.5px;
                border-bottom: 1px solid var(--border-color); margin-bottom: 5px;
            }
            .cart-empty { font-size: 0.85em; color: var(--text-sub); padding: 10px 15px; }
            .cart-lines { list-style: none; padding: 0; margin: 0; }
            .cart-line {
                display: flex; align-items: center; gap: 8px; padding: 8px 15px;
                font-size: 0.85em; border-bottom: 1px solid var(--border-color);
            }
            .cart-line-name { flex: 1; }
            .cart-line-total { color: var(--text-sub); white-space: nowrap; }
            .btn-icon {
                width: 22px; height: 22px; border: none; border-radius: 4px; cursor: pointer;
                background: transparent; color: var(--text-sub); font-size: 0.8em;
            }
            .btn-icon:hover { background: var(--bg-hover); color: var(--text-main); }
            .cart-total {
                display: flex; justify-content: space-between; padding: 12px 15px;
                font-weight: 700; font-size: 0.95em;
            }
            .cart-total-value { color: var(--accent-primary); }

            ::-webkit-scrollbar { width: 8px; height: 8px; }
            ::-webkit-scrollbar-track { background: var(--bg-base); }
            ::-webkit-scrollbar-thumb { background: var(--border-color); border-radius: 4px; }
            ::-webkit-scrollbar-thumb:hover { background: var(--text-sub); }
        </style>
    "#;

    let window = WindowBuilder::new()
        .with_title("CafeAmicus")
        .with_always_on_top(false)
        .with_decorations(false)
        .with_resizable(true)
        .with_transparent(true);

    let config = Config::new()
        .with_custom_head(custom_head.to_string())
        .with_background_color((30, 30, 46, 255))
        .with_window(window);

    LaunchBuilder::desktop().with_cfg(config).launch(app::app);
}
