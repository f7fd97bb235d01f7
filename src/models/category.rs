//! Category model and the standard catalog
//!
//! The wizard offers a fixed, ordered set of standard expense categories and
//! lets the user add custom ones on top.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Icon used for custom categories unless settings override it
pub const DEFAULT_CUSTOM_ICON: &str = "📝";

/// Where a category came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryOrigin {
    /// Part of the built-in catalog
    Standard,
    /// Created by the user during setup
    Custom,
}

impl fmt::Display for CategoryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

/// An expense category that can be selected during setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Icon shown next to the name
    pub icon: String,

    /// Standard or custom
    pub origin: CategoryOrigin,
}

impl Category {
    /// Create a user-defined category
    pub fn custom(id: CategoryId, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            origin: CategoryOrigin::Custom,
        }
    }

    /// Check if this is a user-defined category
    pub fn is_custom(&self) -> bool {
        self.origin == CategoryOrigin::Custom
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// Built-in expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardCategory {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
}

impl StandardCategory {
    /// Get all standard categories in catalog order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Housing,
            Self::Utilities,
            Self::Entertainment,
            Self::Shopping,
            Self::Healthcare,
            Self::Education,
        ]
    }

    /// Get the catalog id for this category
    pub fn id(&self) -> &'static str {
        match self {
            Self::Food => "1",
            Self::Transportation => "2",
            Self::Housing => "3",
            Self::Utilities => "4",
            Self::Entertainment => "5",
            Self::Shopping => "6",
            Self::Healthcare => "7",
            Self::Education => "8",
        }
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
        }
    }

    /// Get the icon for this category
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍽️",
            Self::Transportation => "🚗",
            Self::Housing => "🏠",
            Self::Utilities => "💡",
            Self::Entertainment => "🎮",
            Self::Shopping => "🛍️",
            Self::Healthcare => "🏥",
            Self::Education => "📚",
        }
    }

    /// Create a Category from this catalog entry
    pub fn to_category(&self) -> Category {
        Category {
            id: CategoryId::from(self.id()),
            name: self.name().to_string(),
            icon: self.icon().to_string(),
            origin: CategoryOrigin::Standard,
        }
    }
}

/// The full standard catalog as owned categories
pub fn standard_categories() -> Vec<Category> {
    StandardCategory::all()
        .iter()
        .map(StandardCategory::to_category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = standard_categories();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].id.as_str(), "1");
        assert_eq!(catalog[0].name, "Food");
        assert_eq!(catalog[7].name, "Education");
        assert!(catalog.iter().all(|c| c.origin == CategoryOrigin::Standard));
    }

    #[test]
    fn test_standard_ids_are_unique() {
        let mut ids: Vec<_> = StandardCategory::all().iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), StandardCategory::all().len());
    }

    #[test]
    fn test_custom_category() {
        let cat = Category::custom(CategoryId::custom(42), "Pets", DEFAULT_CUSTOM_ICON);
        assert!(cat.is_custom());
        assert_eq!(cat.to_string(), "📝 Pets");
    }

    #[test]
    fn test_origin_serialization() {
        let json = serde_json::to_string(&CategoryOrigin::Custom).unwrap();
        assert_eq!(json, "\"custom\"");
    }
}
