use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::{error::AppResult, models::ProductRecord};

/// Sample dataset compiled into the binary
const SAMPLE_PRODUCTS: &str = include_str!("../../data/sample_products.json");

/// Read-only, ordered set of products available for ranking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// Loads the bundled sample catalog
    pub fn embedded() -> AppResult<Self> {
        Self::from_json_str(SAMPLE_PRODUCTS)
    }

    /// Loads a catalog from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Parses a JSON array of products
    ///
    /// Each element is decoded on its own. Elements that fail to decode or
    /// lack an id or language tag are skipped with a warning, so one bad
    /// record does not take the whole catalog down. A document that is not
    /// an array is an error.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        let total = values.len();

        let mut seen_ids = HashSet::new();
        let mut products = Vec::with_capacity(total);

        for (index, value) in values.into_iter().enumerate() {
            let product = match serde_json::from_value::<ProductRecord>(value) {
                Ok(product) => product,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed catalog record");
                    continue;
                }
            };

            if let Err(reason) = validate(&product) {
                tracing::warn!(index, id = %product.id, reason, "Skipping invalid catalog record");
                continue;
            }

            if !seen_ids.insert(product.id.clone()) {
                tracing::warn!(index, id = %product.id, "Duplicate product id in catalog");
            }

            products.push(product);
        }

        if products.len() < total {
            tracing::warn!(
                skipped = total - products.len(),
                kept = products.len(),
                "Catalog contained malformed records"
            );
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate(product: &ProductRecord) -> Result<(), &'static str> {
    if product.id.trim().is_empty() {
        return Err("missing id");
    }
    if product.language.trim().is_empty() {
        return Err("missing language tag");
    }
    Ok(())
}
