use dioxus::prelude::*;

use crate::i18n::I18nService;
use crate::shop::cart::use_cart;
use crate::shop::stock::use_stock;
use crate::shop::Coffee;

/// Desired quantity for one card. Lives in local component state and is
/// clamped in the handlers, between 0 and the remaining stock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuantityField {
    value: u32,
}

impl QuantityField {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn can_decrease(&self) -> bool {
        self.value > 0
    }

    pub fn can_increase(&self, stock: u32) -> bool {
        self.value < stock
    }

    pub fn decrease(&mut self) {
        if self.can_decrease() {
            self.value -= 1;
        }
    }

    pub fn increase(&mut self, stock: u32) {
        if self.can_increase(stock) {
            self.value += 1;
        }
    }

    /// Takes the chosen quantity and resets the field. Returns `None` for a
    /// zero quantity, which submissions treat as a no-op.
    pub fn submit(&mut self) -> Option<u32> {
        let value = std::mem::take(&mut self.value);
        if value > 0 {
            Some(value)
        } else {
            None
        }
    }
}

#[component]
pub fn CoffeeCard(coffee: Coffee) -> Element {
    let i18n_service = use_context::<Signal<I18nService>>();
    let stock = use_stock();
    let mut cart = use_cart();
    let mut desired = use_signal(QuantityField::default);

    let i18n = i18n_service.read();
    let stock_units = stock.stock_specific_coffee(&coffee.id).unwrap_or(0);
    let price_formatted = i18n.format_price(coffee.price);
    let tags = coffee.tags.clone();
    let coffee_for_cart = coffee.clone();

    rsx! {
        div { class: "coffee-card",
            img { class: "coffee-image", src: "{coffee.image}", alt: "{coffee.name}" }
            div { class: "coffee-tags",
                for tag in tags {
                    span { class: "coffee-tag", "{tag}" }
                }
            }
            h1 { class: "coffee-name", "{coffee.name}" }
            p { class: "coffee-description", "{coffee.description}" }
            div { class: "buy-row",
                div { class: "coffee-price",
                    span { class: "currency", "€" }
                    span { class: "price-value", "{price_formatted}" }
                }
                div { class: "buy-actions",
                    button {
                        class: "stepper-btn",
                        title: "{i18n.translate(\"btn-decrease\")}",
                        disabled: !desired.read().can_decrease(),
                        onclick: move |_| desired.write().decrease(),
                        "−"
                    }
                    span { class: "stepper-value", "{desired.read().value()}" }
                    button {
                        class: "stepper-btn",
                        title: "{i18n.translate(\"btn-increase\")}",
                        disabled: !desired.read().can_increase(stock_units),
                        onclick: move |_| desired.write().increase(stock_units),
                        "+"
                    }
                    button {
                        class: "btn-buy",
                        title: "{i18n.translate(\"btn-add-to-cart\")}",
                        onclick: move |_| {
                            if let Some(quantity) = desired.write().submit() {
                                cart.put_coffee_in_cart(&coffee_for_cart, quantity);
                            }
                        },
                        "🛒"
                    }
                }
            }
            span { class: "stock-badge", "{stock_units} {i18n.translate(\"badge-in-stock\")}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_decrease_disabled() {
        let field = QuantityField::default();
        assert_eq!(field.value(), 0);
        assert!(!field.can_decrease());
    }

    #[test]
    fn increase_is_disabled_once_the_stock_is_reached() {
        let mut field = QuantityField::default();
        field.increase(2);
        field.increase(2);
        assert_eq!(field.value(), 2);
        assert!(!field.can_increase(2));
        field.increase(2);
        assert_eq!(field.value(), 2);
    }

    #[test]
    fn unknown_stock_disables_both_directions_at_mount() {
        let field = QuantityField::default();
        assert!(!field.can_increase(0));
        assert!(!field.can_decrease());
    }

    #[test]
    fn decrease_stops_at_zero() {
        let mut field = QuantityField::default();
        field.increase(5);
        field.decrease();
        field.decrease();
        assert_eq!(field.value(), 0);
    }

    #[test]
    fn submit_takes_the_quantity_and_resets() {
        let mut field = QuantityField::default();
        field.increase(5);
        field.increase(5);
        assert_eq!(field.submit(), Some(2));
        assert_eq!(field.value(), 0);
    }

    #[test]
    fn zero_submission_is_none() {
        let mut field = QuantityField::default();
        assert_eq!(field.submit(), None);
        assert_eq!(field.value(), 0);
    }
}
