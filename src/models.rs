// 🧱 Records - Progress updates, budget items, wish list items
// Records are immutable once appended to the store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// ============================================================================
// CATEGORY
// ============================================================================

/// Fixed set of spending categories shared by the budget and the wish list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Motor,
    Transmission,
    #[serde(rename = "Body Work")]
    BodyWork,
    Paint,
    Interior,
    Suspension,
    Electrical,
    #[serde(rename = "Wheels & Tires")]
    WheelsAndTires,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Motor,
        Category::Transmission,
        Category::BodyWork,
        Category::Paint,
        Category::Interior,
        Category::Suspension,
        Category::Electrical,
        Category::WheelsAndTires,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Motor => "Motor",
            Category::Transmission => "Transmission",
            Category::BodyWork => "Body Work",
            Category::Paint => "Paint",
            Category::Interior => "Interior",
            Category::Suspension => "Suspension",
            Category::Electrical => "Electrical",
            Category::WheelsAndTires => "Wheels & Tires",
            Category::Other => "Other",
        }
    }

    /// Next category in `ALL`, wrapping around (used by the TUI picker)
    pub fn next(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownCategory(wanted.to_string()))
    }
}

// ============================================================================
// PROGRESS UPDATE
// ============================================================================

/// A dated journal entry with an optional photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Calendar date as typed, empty when not set
    pub date: String,
    pub title: String,
    pub description: String,
    /// Photo URL, empty when the update has no photo
    pub image_url: String,
}

impl ProgressUpdate {
    pub fn date(&self) -> Option<&str> {
        if self.date.is_empty() {
            None
        } else {
            Some(&self.date)
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        if self.image_url.trim().is_empty() {
            None
        } else {
            Some(&self.image_url)
        }
    }
}

// ============================================================================
// BUDGET + WISH LIST
// ============================================================================

/// A recorded expenditure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub category: Category,
    pub item: String,
    pub cost: f64,
}

/// A planned expenditure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishItem {
    pub category: Category,
    pub item: String,
    pub estimated_cost: f64,
}

/// Shared view of budget and wish list rows, so one table renderer serves both
pub trait CostedItem {
    fn category(&self) -> Category;
    fn item(&self) -> &str;
    fn amount(&self) -> f64;
}

impl CostedItem for BudgetItem {
    fn category(&self) -> Category {
        self.category
    }

    fn item(&self) -> &str {
        &self.item
    }

    fn amount(&self) -> f64 {
        self.cost
    }
}

impl CostedItem for WishItem {
    fn category(&self) -> Category {
        self.category
    }

    fn item(&self) -> &str {
        &self.item
    }

    fn amount(&self) -> f64 {
        self.estimated_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_by_label() {
        assert_eq!("Body Work".parse::<Category>().unwrap(), Category::BodyWork);
        assert_eq!("  paint ".parse::<Category>().unwrap(), Category::Paint);
        assert_eq!(
            "wheels & tires".parse::<Category>().unwrap(),
            Category::WheelsAndTires
        );
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "Spoilers".parse::<Category>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("Spoilers".to_string()));
    }

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(Category::Other.next(), Category::Motor);
        assert_eq!(Category::Motor.previous(), Category::Other);
        assert_eq!(Category::Motor.next(), Category::Transmission);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::BodyWork).unwrap();
        assert_eq!(json, "\"Body Work\"");

        let back: Category = serde_json::from_str("\"Wheels & Tires\"").unwrap();
        assert_eq!(back, Category::WheelsAndTires);
    }

    #[test]
    fn test_progress_optional_fields() {
        let update = ProgressUpdate {
            date: String::new(),
            title: "Title".to_string(),
            description: "Desc".to_string(),
            image_url: "  ".to_string(),
        };

        assert_eq!(update.date(), None);
        assert_eq!(update.image_url(), None);
    }

    #[test]
    fn test_costed_item_views() {
        let wish = WishItem {
            category: Category::Paint,
            item: "Red".to_string(),
            estimated_cost: 900.0,
        };

        assert_eq!(wish.category(), Category::Paint);
        assert_eq!(wish.item(), "Red");
        assert_eq!(wish.amount(), 900.0);
    }
}
