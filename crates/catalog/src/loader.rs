//! Loader for JSON catalog exports.
//!
//! The demo and CLI run against a directory containing:
//! - `products.json`: array of [`Product`]
//! - `inventory.json`: array of [`InventoryRecord`] (optional; catalogs
//!   without stock data simply skip availability signals)

use crate::error::{CatalogError, Result};
use crate::index::CatalogIndex;
use crate::types::{InventoryRecord, Product};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::ParseError {
        file: path.display().to_string(),
        source,
    })
}

impl CatalogIndex {
    /// Load a catalog from a directory of JSON exports.
    pub fn load_from_files(dir: &Path) -> Result<Self> {
        let mut index = CatalogIndex::new();

        let products: Vec<Product> = read_json(&dir.join("products.json"))?;
        for product in products {
            index.insert_product(product);
        }

        // Inventory is optional in this domain; a missing file means
        // "no availability signal", which the pipeline already handles.
        let inventory_path = dir.join("inventory.json");
        if inventory_path.exists() {
            let records: Vec<InventoryRecord> = read_json(&inventory_path)?;
            for record in records {
                index.insert_inventory(record);
            }
        }

        Ok(index)
    }
}
