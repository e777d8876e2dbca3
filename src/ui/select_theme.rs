use dioxus::prelude::*;

use crate::i18n::I18nService;
use crate::save_theme_preference;
use crate::theme::{use_themes, ThemeMode, ThemeState};

/// Glyph button that swaps between the two fixed modes. The dark theme shows
/// the moon and requests `Light`, everything else shows the sun and requests
/// `Dark`.
#[component]
pub fn SelectTheme() -> Element {
    let i18n_service = use_context::<Signal<I18nService>>();
    let i18n = i18n_service.read();
    let mut themes = use_themes();

    match themes.read().toggle_target() {
        ThemeMode::Light => rsx! {
            div {
                class: "theme-toggle",
                title: "{i18n.translate(\"theme-to-light\")}",
                onclick: move |_| request_theme(&mut themes, ThemeMode::Light),
                span { "☾" }
            }
        },
        ThemeMode::Dark => rsx! {
            div {
                class: "theme-toggle",
                title: "{i18n.translate(\"theme-to-dark\")}",
                onclick: move |_| request_theme(&mut themes, ThemeMode::Dark),
                span { "☀" }
            }
        },
    }
}

fn request_theme(themes: &mut Signal<ThemeState>, mode: ThemeMode) {
    themes.write().change_theme(mode);
    let name = themes.read().current_theme().name;
    tracing::info!(theme = name, "theme switched");
    let _ = save_theme_preference(name);
}
