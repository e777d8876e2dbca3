use serde::Deserialize;

pub mod cart;
pub mod stock;

/// A product from the coffee catalog. Immutable from the UI's perspective.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coffee {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub tags: Vec<String>,
}

/// A catalog entry: the coffee plus the units the shop can still sell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoffeeInStock {
    #[serde(flatten)]
    pub coffee: Coffee,
    pub stock: u32,
}

pub fn load_catalog() -> Result<Vec<CoffeeInStock>, String> {
    serde_json::from_str(include_str!("../../data/coffees.json"))
        .map_err(|_| "err-catalog-parse".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_and_entries_are_well_formed() {
        let catalog = load_catalog().expect("embedded catalog parses");
        assert!(!catalog.is_empty());
        for entry in &catalog {
            assert!(!entry.coffee.id.is_empty());
            assert!(!entry.coffee.name.is_empty());
            assert!(!entry.coffee.image.is_empty());
            assert!(!entry.coffee.tags.is_empty());
            assert!(entry.coffee.price > 0.0);
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = load_catalog().unwrap();
        let mut ids: Vec<&str> = catalog.iter().map(|e| e.coffee.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
