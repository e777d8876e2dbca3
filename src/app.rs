use dioxus::prelude::*;
use crate::dioxus_elements::input_data::MouseButton;
use crate::i18n::I18nService;
use crate::load_theme_preference;
use crate::shop;
use crate::shop::cart::{use_cart, CartState};
use crate::shop::stock::StockState;
use crate::theme::ThemeState;
use crate::ui::coffee_card::CoffeeCard;
use crate::ui::select_theme::SelectTheme;
use sys_locale::get_locale;

pub fn app() -> Element {
    let i18n_service = use_context_provider(|| {
        let system_lang = get_locale().unwrap_or_else(|| "en-US".to_string());
        let lang = if system_lang.starts_with("de") { "de-DE" } else { "en-US" };
        Signal::new(I18nService::new(lang))
    });
    use_context_provider(|| Signal::new(ThemeState::from_saved(&load_theme_preference())));

    let catalog = use_signal(|| match shop::load_catalog() {
        Ok(entries) => {
            tracing::info!(coffees = entries.len(), "catalog loaded");
            entries
        }
        Err(key) => {
            tracing::warn!(error = key, "catalog load failed");
            Vec::new()
        }
    });
    use_context_provider(|| Signal::new(StockState::from_catalog(&catalog.peek())));
    use_context_provider(|| Signal::new(CartState::new()));

    let themes = crate::theme::use_themes();
    let mut cart = use_cart();

    let i18n = i18n_service.read();
    let theme_name = themes.read().current_theme().name;
    let entries = catalog.read().clone();
    let cart_state = cart.state().read().clone();
    let cart_count = cart_state.item_count();
    let total_formatted = i18n.format_price(cart_state.total_price());

    rsx! {
        div {
            class: "app-root",
            "data-theme": "{theme_name}",

            div { class: "title-bar",
                onmousedown: |e| {
                    if e.held_buttons().contains(MouseButton::Primary) {
                        dioxus::desktop::window().drag();
                    }
                },
                div { class: "title-section-left",
                    span { style: "color: var(--accent-primary); margin-right: 5px;", "Cafe" } "Amicus"
                }
                div { class: "title-section-center",
                    span { class: "tagline", "{i18n.translate(\"app-tagline\")}" }
                }
                div { class: "title-section-right",
                    div { class: "cart-badge", title: "{i18n.translate(\"cart-title\")}", "🛒 {cart_count}" }
                    SelectTheme {}
                    div { class: "window-controls",
                        div { class: "control-btn",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                dioxus::desktop::window().set_minimized(true);
                            },
                            "_"
                        }
                        div { class: "control-btn",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                let w = dioxus::desktop::window();
                                if w.is_maximized() { w.set_maximized(false); } else { w.set_maximized(true); }
                            },
                            "☐"
                        }
                        div { class: "control-btn close",
                            onmousedown: |e| e.stop_propagation(),
                            onclick: |e| {
                                e.stop_propagation();
                                std::thread::spawn::<_, ()>(|| std::process::exit(0));
                            },
                            "✕"
                        }
                    }
                }
            }

            div { class: "content",
                div { class: "storefront",
                    h2 { class: "storefront-heading", "{i18n.translate(\"heading-coffees\")}" }
                    div { class: "coffee-grid",
                        for entry in entries {
                            CoffeeCard { coffee: entry.coffee.clone() }
                        }
                    }
                }

                div { class: "cart-panel",
                    div { class: "workspace-header", "{i18n.translate(\"cart-title\")}" }
                    if cart_state.is_empty() {
                        p { class: "cart-empty", "{i18n.translate(\"cart-empty\")}" }
                    } else {
                        ul { class: "cart-lines",
                            for item in cart_state.items().to_vec() {
                                {
                                    let line_total = i18n.format_price(item.coffee.price * item.quantity as f64);
                                    let remove_id = item.coffee.id.clone();
                                    rsx! {
                                        li { class: "cart-line",
                                            span { class: "cart-line-name", "{item.quantity}× {item.coffee.name}" }
                                            span { class: "cart-line-total", "€ {line_total}" }
                                            button { class: "btn-icon", title: "{i18n.translate(\"btn-remove\")}",
                                                onclick: move |_| cart.remove_coffee(&remove_id),
                                                "✕"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "cart-total",
                            span { "{i18n.translate(\"cart-total\")}" }
                            span { class: "cart-total-value", "€ {total_formatted}" }
                        }
                    }
                }
            }
        }
    }
}
