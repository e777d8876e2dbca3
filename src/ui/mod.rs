pub mod coffee_card;
pub mod select_theme;
