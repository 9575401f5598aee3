// ✍️ Mutators - validate raw form input, then append to the store
// A rejected submission leaves both the store and the form untouched

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::format::parse_cost;
use crate::models::{BudgetItem, Category, ProgressUpdate, WishItem};
use crate::render::Region;
use crate::store::CollectionStore;

/// Largest accepted cost; keeps every per-category and overall sum finite
pub const MAX_COST: f64 = 1_000_000_000_000.0;

// ============================================================================
// FORMS
// ============================================================================

/// Raw values of the progress form controls
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressForm {
    pub date: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl ProgressForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raw values of the budget / wish list form controls
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub category: String,
    pub item: String,
    pub cost: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            category: Category::default().label().to_string(),
            item: String::new(),
            cost: String::new(),
        }
    }
}

impl ItemForm {
    /// Clears item and cost; the category selection stays as it was
    pub fn clear(&mut self) {
        self.item.clear();
        self.cost.clear();
    }
}

// ============================================================================
// MUTATORS
// ============================================================================

pub fn add_progress_update(
    store: &mut CollectionStore,
    form: &mut ProgressForm,
) -> Result<&'static [Region], ValidationError> {
    let title = form.title.trim();
    let description = form.description.trim();

    if title.is_empty() || description.is_empty() {
        return Err(ValidationError::MissingProgressFields);
    }

    let update = ProgressUpdate {
        date: form.date.clone(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: form.image_url.trim().to_string(),
    };

    let added = store.push_progress(update);
    debug!(title = %added.title, has_image = added.image_url().is_some(), "progress update added");

    form.clear();
    Ok(&[Region::ProgressList, Region::Gallery])
}

pub fn add_budget_item(
    store: &mut CollectionStore,
    form: &mut ItemForm,
) -> Result<&'static [Region], ValidationError> {
    let (category, item, cost) = validate_item(form, ValidationError::InvalidBudgetItem)?;

    let added = store.push_budget(BudgetItem { category, item, cost });
    debug!(category = %added.category, cost = added.cost, "budget item added");

    form.clear();
    Ok(&[Region::BudgetTable, Region::BudgetTotals])
}

pub fn add_wish_item(
    store: &mut CollectionStore,
    form: &mut ItemForm,
) -> Result<&'static [Region], ValidationError> {
    let (category, item, estimated_cost) = validate_item(form, ValidationError::InvalidWishItem)?;

    let added = store.push_wish(WishItem {
        category,
        item,
        estimated_cost,
    });
    debug!(category = %added.category, cost = added.estimated_cost, "wish item added");

    form.clear();
    Ok(&[Region::WishTable])
}

fn validate_item(
    form: &ItemForm,
    invalid: ValidationError,
) -> Result<(Category, String, f64), ValidationError> {
    let item = form.item.trim();
    let cost = parse_cost(&form.cost);

    let cost = match cost {
        Some(cost) if !item.is_empty() => cost,
        _ => return Err(invalid),
    };

    if cost < 0.0 {
        warn!(cost, "rejected negative cost");
        return Err(ValidationError::NegativeCost);
    }

    if cost > MAX_COST {
        warn!(cost, "rejected oversized cost");
        return Err(ValidationError::CostTooLarge);
    }

    let category: Category = form.category.parse()?;

    Ok((category, item.to_string(), cost))
}
