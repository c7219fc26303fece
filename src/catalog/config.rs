use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::generator::CommentTable;
use crate::models::Ingredient;

/// On-disk kitchen configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KitchenConfig {
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,

    #[serde(default)]
    pub comments: Option<Vec<Vec<String>>>,
}

impl KitchenConfig {
    /// Build the catalog, falling back to the built-in table.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.ingredients {
            Some(entries) => Catalog::new(entries.clone()),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Build the comment table, falling back to the built-in one.
    pub fn comment_table(&self) -> Result<CommentTable> {
        match &self.comments {
            Some(buckets) => CommentTable::from_buckets(buckets.clone()),
            None => Ok(CommentTable::builtin()),
        }
    }
}

/// Load a kitchen configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<KitchenConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config: KitchenConfig = serde_json::from_str(&content)?;

    info!(
        "loaded kitchen config from {} (ingredients: {}, comments: {})",
        path.display(),
        config.ingredients.as_ref().map_or(0, Vec::len),
        config.comments.as_ref().map_or(0, Vec::len)
    );

    Ok(config)
}
