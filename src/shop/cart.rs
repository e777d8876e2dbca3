use dioxus::prelude::*;

use super::stock::StockState;
use super::Coffee;

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub coffee: Coffee,
    pub quantity: u32,
}

/// Everything the customer has put in the cart so far. Repeated adds of the
/// same coffee merge into one line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn put_coffee_in_cart(&mut self, coffee: &Coffee, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.coffee.id == coffee.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                coffee: coffee.clone(),
                quantity,
            });
        }
    }

    pub fn remove_coffee(&mut self, id: &str) -> Option<CartItem> {
        let pos = self.items.iter().position(|i| i.coffee.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.items
            .iter()
            .find(|i| i.coffee.id == id)
            .map_or(0, |i| i.quantity)
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.coffee.price * i.quantity as f64)
            .sum()
    }
}

/// Cart-mutation capability handed to the UI. Adding a coffee reserves its
/// units, removing a line releases them again.
#[derive(Clone, Copy)]
pub struct CartHandle {
    items: Signal<CartState>,
    stock: Signal<StockState>,
}

impl CartHandle {
    pub fn put_coffee_in_cart(&mut self, coffee: &Coffee, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.items.write().put_coffee_in_cart(coffee, quantity);
        self.stock.write().reserve(&coffee.id, quantity);
        tracing::info!(coffee = %coffee.id, quantity, "put coffee in cart");
    }

    pub fn remove_coffee(&mut self, id: &str) {
        let removed = self.items.write().remove_coffee(id);
        if let Some(item) = removed {
            self.stock.write().release(&item.coffee.id, item.quantity);
            tracing::info!(coffee = %item.coffee.id, "removed coffee from cart");
        }
    }

    pub fn state(&self) -> Signal<CartState> {
        self.items
    }
}

pub fn use_cart() -> CartHandle {
    CartHandle {
        items: use_context(),
        stock: use_context(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee(id: &str, price: f64) -> Coffee {
        Coffee {
            id: id.to_string(),
            name: id.to_string(),
            description: "Test".to_string(),
            image: "test.png".to_string(),
            price,
            tags: vec!["test".to_string()],
        }
    }

    #[test]
    fn adds_merge_into_one_line() {
        let mut cart = CartState::new();
        let espresso = coffee("espresso", 3.9);
        cart.put_coffee_in_cart(&espresso, 2);
        cart.put_coffee_in_cart(&espresso, 1);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of("espresso"), 3);
    }

    #[test]
    fn zero_quantity_add_is_a_no_op() {
        let mut cart = CartState::new();
        cart.put_coffee_in_cart(&coffee("espresso", 3.9), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_returns_the_line() {
        let mut cart = CartState::new();
        cart.put_coffee_in_cart(&coffee("espresso", 3.9), 2);
        let removed = cart.remove_coffee("espresso").expect("line exists");
        assert_eq!(removed.quantity, 2);
        assert!(cart.is_empty());
        assert!(cart.remove_coffee("espresso").is_none());
    }

    #[test]
    fn counts_and_totals_span_all_lines() {
        let mut cart = CartState::new();
        cart.put_coffee_in_cart(&coffee("espresso", 3.9), 2);
        cart.put_coffee_in_cart(&coffee("latte", 4.6), 1);
        assert_eq!(cart.item_count(), 3);
        assert!((cart.total_price() - 12.4).abs() < 1e-9);
    }

    #[test]
    fn unknown_coffee_has_zero_quantity() {
        let cart = CartState::new();
        assert_eq!(cart.quantity_of("latte"), 0);
    }
}
