//! Catalog storage and loading

use super::models::{CatalogError, CatalogFile, CatalogItem};
use crate::pricing::{ItemKind, PriceBook};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Immutable product and option catalogs with a derived price book
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<CatalogItem>,
    options: Vec<CatalogItem>,
    prices: PriceBook,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names within a kind.
    pub fn new(
        products: Vec<CatalogItem>,
        options: Vec<CatalogItem>,
    ) -> Result<Self, CatalogError> {
        let prices = PriceBook {
            products: price_table(&products, ItemKind::Products)?,
            options: price_table(&options, ItemKind::Options)?,
        };

        Ok(Self {
            products,
            options,
            prices,
        })
    }

    /// The travel catalog shipped with the service
    pub fn travel_default() -> Self {
        let products = vec![
            CatalogItem::new("America", 1000).with_image("images/america.jpeg"),
            CatalogItem::new("England", 1000).with_image("images/england.jpeg"),
            CatalogItem::new("Portland", 1000).with_image("images/portland.jpeg"),
        ];
        let options = vec![
            CatalogItem::new("Insurance", 500),
            CatalogItem::new("Dinner", 500),
            CatalogItem::new("FirstClass", 500),
        ];

        let prices = PriceBook {
            products: products.iter().map(|i| (i.name.clone(), i.price)).collect(),
            options: options.iter().map(|i| (i.name.clone(), i.price)).collect(),
        };

        Self {
            products,
            options,
            prices,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.countries, file.options)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        info!(
            "Loaded catalog from {:?}: {} products, {} options",
            path,
            catalog.products.len(),
            catalog.options.len()
        );
        Ok(catalog)
    }

    pub fn items(&self, kind: ItemKind) -> &[CatalogItem] {
        match kind {
            ItemKind::Products => &self.products,
            ItemKind::Options => &self.options,
        }
    }

    /// Items priced at or below `max_price`; `None` or 0 returns everything.
    pub fn filtered(&self, kind: ItemKind, max_price: Option<u64>) -> Vec<CatalogItem> {
        self.items(kind)
            .iter()
            .filter(|item| match max_price {
                Some(limit) if limit > 0 => item.price <= limit,
                _ => true,
            })
            .cloned()
            .collect()
    }

    pub fn price_book(&self) -> &PriceBook {
        &self.prices
    }
}

fn price_table(
    items: &[CatalogItem],
    kind: ItemKind,
) -> Result<HashMap<String, u64>, CatalogError> {
    let mut table = HashMap::with_capacity(items.len());
    for item in items {
        if table.insert(item.name.clone(), item.price).is_some() {
            return Err(CatalogError::DuplicateItem {
                kind,
                name: item.name.clone(),
            });
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_prices() {
        let catalog = Catalog::travel_default();
        let prices = catalog.price_book();
        assert_eq!(prices.unit_price(ItemKind::Products, "America"), 1000);
        assert_eq!(prices.unit_price(ItemKind::Options, "Insurance"), 500);
        assert_eq!(prices.unit_price(ItemKind::Options, "America"), 0);
    }

    #[test]
    fn test_from_json_reads_travel_layout() {
        let raw = r#"{
            "countries": [
                { "name": "America", "imagePath": "/images/america.jpeg", "price": 1200 },
                { "name": "Japan", "price": 800 }
            ],
            "options": [ { "name": "Insurance", "price": 300 } ]
        }"#;

        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(catalog.items(ItemKind::Products).len(), 2);
        assert_eq!(
            catalog.items(ItemKind::Products)[0].image_path.as_deref(),
            Some("/images/america.jpeg")
        );
        assert_eq!(
            catalog.price_book().unit_price(ItemKind::Products, "Japan"),
            800
        );
        assert_eq!(
            catalog.price_book().unit_price(ItemKind::Options, "Insurance"),
            300
        );
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let err = Catalog::new(
            vec![CatalogItem::new("America", 1), CatalogItem::new("America", 2)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem { kind: ItemKind::Products, .. }));
    }

    #[test]
    fn test_same_name_allowed_across_kinds() {
        let catalog = Catalog::new(
            vec![CatalogItem::new("Tour", 1000)],
            vec![CatalogItem::new("Tour", 200)],
        )
        .unwrap();
        assert_eq!(catalog.price_book().unit_price(ItemKind::Options, "Tour"), 200);
    }

    #[test]
    fn test_filtered_by_max_price() {
        let catalog = Catalog::new(
            vec![
                CatalogItem::new("Cheap", 500),
                CatalogItem::new("Mid", 1500),
                CatalogItem::new("Pricey", 2500),
            ],
            vec![],
        )
        .unwrap();

        let names = |items: Vec<CatalogItem>| -> Vec<String> {
            items.into_iter().map(|i| i.name).collect()
        };
        assert_eq!(
            names(catalog.filtered(ItemKind::Products, Some(1500))),
            vec!["Cheap", "Mid"]
        );
        assert_eq!(catalog.filtered(ItemKind::Products, Some(0)).len(), 3);
        assert_eq!(catalog.filtered(ItemKind::Products, None).len(), 3);
    }
}
