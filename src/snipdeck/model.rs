use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two fixed partitions of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Offer,
    Price,
}

impl Category {
    /// Display order of the sections.
    pub const ALL: [Category; 2] = [Category::Offer, Category::Price];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Offer => "offer",
            Category::Price => "price",
        }
    }

    /// Section heading shown above the category's buttons.
    pub fn title(self) -> &'static str {
        match self {
            Category::Offer => "Offers",
            Category::Price => "Prices",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offer" => Ok(Category::Offer),
            "price" => Ok(Category::Price),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// One labeled piece of copyable text.
///
/// The label doubles as the snippet's identity: it is unique across the
/// whole catalog, regardless of category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub label: String,
    pub text: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl Snippet {
    pub fn new(label: impl Into<String>, text: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            category,
        }
    }

    /// Both fields must be non-empty for a snippet to enter the catalog.
    pub fn is_well_formed(&self) -> bool {
        !self.label.is_empty() && !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_lowercase_names() {
        assert_eq!("offer".parse::<Category>().unwrap(), Category::Offer);
        assert_eq!("price".parse::<Category>().unwrap(), Category::Price);
        assert!("Offer".parse::<Category>().is_err());
        assert!("discount".parse::<Category>().is_err());
    }

    #[test]
    fn snippet_serializes_category_as_type() {
        let snippet = Snippet::new("50% off", "CODE50", Category::Offer);
        let json = serde_json::to_value(&snippet).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "50% off", "text": "CODE50", "type": "offer"})
        );
    }

    #[test]
    fn empty_fields_are_not_well_formed() {
        assert!(Snippet::new("a", "b", Category::Price).is_well_formed());
        assert!(!Snippet::new("", "b", Category::Price).is_well_formed());
        assert!(!Snippet::new("a", "", Category::Price).is_well_formed());
    }
}
