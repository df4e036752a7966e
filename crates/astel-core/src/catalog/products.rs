//! Flat panel detector catalog

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Static,
    Mobile,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Static => write!(f, "Static"),
            ProductCategory::Mobile => write!(f, "Mobile"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProductRecord {
    /// Label used for the product in the form's topic select
    pub fn topic_label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}
