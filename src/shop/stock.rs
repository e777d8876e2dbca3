use std::collections::HashMap;

use dioxus::prelude::*;

use super::CoffeeInStock;

/// Remaining purchasable units per coffee id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StockState {
    units: HashMap<String, u32>,
}

impl StockState {
    pub fn from_catalog(catalog: &[CoffeeInStock]) -> Self {
        let units = catalog
            .iter()
            .map(|entry| (entry.coffee.id.clone(), entry.stock))
            .collect();
        Self { units }
    }

    /// Remaining units for a coffee, or `None` when the coffee is unknown.
    /// Consumers treat unknown as 0.
    pub fn stock_specific_coffee(&self, id: &str) -> Option<u32> {
        self.units.get(id).copied()
    }

    pub fn reserve(&mut self, id: &str, quantity: u32) {
        if let Some(units) = self.units.get_mut(id) {
            *units = units.saturating_sub(quantity);
        }
    }

    pub fn release(&mut self, id: &str, quantity: u32) {
        if let Some(units) = self.units.get_mut(id) {
            *units += quantity;
        }
    }
}

/// Stock-lookup capability handed to the UI.
#[derive(Clone, Copy)]
pub struct StockHandle {
    state: Signal<StockState>,
}

impl StockHandle {
    pub fn stock_specific_coffee(&self, id: &str) -> Option<u32> {
        self.state.read().stock_specific_coffee(id)
    }
}

pub fn use_stock() -> StockHandle {
    StockHandle {
        state: use_context(),
    }
}
