// 🖼️ Renderers - rebuild each display region from the full collection
// Output is a plain view model; `html` and `ui` turn it into markup or widgets

use serde::Serialize;

use crate::format::format_currency;
use crate::models::{Category, CostedItem, ProgressUpdate};

pub const NO_PROGRESS: &str = "No progress updates yet.";
pub const NO_BUDGET_ITEMS: &str = "No budget items yet.";
pub const NO_WISH_ITEMS: &str = "No wish list items yet.";
pub const NO_PHOTOS: &str = "No photos yet. Add some images in the Progress tab.";
pub const EMPTY_TOTAL: &str = "Total spent so far: $0.00";
pub const GALLERY_ALT: &str = "Build photo";

/// Number of columns in the budget and wish list tables
pub const TABLE_COLUMNS: usize = 3;

/// A display area that is re-rendered as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ProgressList,
    Gallery,
    BudgetTable,
    BudgetTotals,
    WishTable,
}

// ============================================================================
// VIEW MODELS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressCard {
    pub image: Option<Image>,
    pub title: String,
    pub date_line: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressListView {
    Placeholder { message: &'static str },
    Cards { cards: Vec<ProgressCard> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub category: String,
    pub item: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableView {
    /// One row spanning every column
    Placeholder { message: &'static str, colspan: usize },
    Rows { rows: Vec<TableRow> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsView {
    /// Per-category sums in first-seen order
    pub by_category: Vec<CategoryTotal>,
    pub overall: f64,
}

impl TotalsView {
    /// Lines to display; the last one is the emphasized overall total
    pub fn lines(&self) -> Vec<String> {
        if self.by_category.is_empty() {
            return vec![EMPTY_TOTAL.to_string()];
        }

        let mut lines: Vec<String> = self
            .by_category
            .iter()
            .map(|t| format!("{}: {}", t.category, format_currency(t.total)))
            .collect();
        lines.push(format!("Overall total: {}", format_currency(self.overall)));
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryView {
    Placeholder { message: &'static str },
    Images { images: Vec<Image> },
}

// ============================================================================
// RENDERERS
// ============================================================================

/// Progress cards, newest first
pub fn render_progress_list(updates: &[ProgressUpdate]) -> ProgressListView {
    if updates.is_empty() {
        return ProgressListView::Placeholder {
            message: NO_PROGRESS,
        };
    }

    let cards = updates
        .iter()
        .rev()
        .map(|update| ProgressCard {
            image: update.image_url().map(|src| Image {
                src: src.to_string(),
                alt: update.title.clone(),
            }),
            title: update.title.clone(),
            date_line: match update.date() {
                Some(date) => format!("Date: {}", date),
                None => "Date: not set".to_string(),
            },
            description: update.description.clone(),
        })
        .collect();

    ProgressListView::Cards { cards }
}

pub fn render_budget_table<T: CostedItem>(items: &[T]) -> TableView {
    render_table(items, NO_BUDGET_ITEMS)
}

pub fn render_wish_table<T: CostedItem>(items: &[T]) -> TableView {
    render_table(items, NO_WISH_ITEMS)
}

fn render_table<T: CostedItem>(items: &[T], placeholder: &'static str) -> TableView {
    if items.is_empty() {
        return TableView::Placeholder {
            message: placeholder,
            colspan: TABLE_COLUMNS,
        };
    }

    let rows = items
        .iter()
        .map(|item| TableRow {
            category: item.category().to_string(),
            item: item.item().to_string(),
            cost: format_currency(item.amount()),
        })
        .collect();

    TableView::Rows { rows }
}

/// Per-category and overall sums in a single pass
pub fn render_budget_totals<T: CostedItem>(items: &[T]) -> TotalsView {
    let mut by_category: Vec<CategoryTotal> = Vec::new();
    let mut overall = 0.0;

    for item in items {
        let category = item.category();
        match by_category.iter_mut().find(|t| t.category == category) {
            Some(entry) => entry.total += item.amount(),
            None => by_category.push(CategoryTotal {
                category,
                total: item.amount(),
            }),
        }
        overall += item.amount();
    }

    TotalsView {
        by_category,
        overall,
    }
}

/// Photos from progress updates, oldest first
pub fn render_gallery(updates: &[ProgressUpdate]) -> GalleryView {
    let images: Vec<Image> = updates
        .iter()
        .filter_map(|update| update.image_url())
        .map(|src| Image {
            src: src.to_string(),
            alt: GALLERY_ALT.to_string(),
        })
        .collect();

    if images.is_empty() {
        GalleryView::Placeholder { message: NO_PHOTOS }
    } else {
        GalleryView::Images { images }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, WishItem};

    fn update(title: &str, date: &str, image_url: &str) -> ProgressUpdate {
        ProgressUpdate {
            date: date.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            image_url: image_url.to_string(),
        }
    }

    fn budget(category: Category, cost: f64) -> BudgetItem {
        BudgetItem {
            category,
            item: format!("{} part", category),
            cost,
        }
    }

    #[test]
    fn test_progress_list_newest_first() {
        let updates = vec![update("P1", "", ""), update("P2", "", ""), update("P3", "", "")];

        let ProgressListView::Cards { cards } = render_progress_list(&updates) else {
            panic!("expected cards");
        };

        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["P3", "P2", "P1"]);
    }

    #[test]
    fn test_progress_card_fields() {
        let updates = vec![
            update("Dated", "2024-06-26", "images/Day1.jpg"),
            update("Undated", "", ""),
        ];

        let ProgressListView::Cards { cards } = render_progress_list(&updates) else {
            panic!("expected cards");
        };

        assert_eq!(cards[0].date_line, "Date: not set");
        assert_eq!(cards[0].image, None);
        assert_eq!(cards[1].date_line, "Date: 2024-06-26");
        assert_eq!(
            cards[1].image,
            Some(Image {
                src: "images/Day1.jpg".to_string(),
                alt: "Dated".to_string(),
            })
        );
        assert_eq!(cards[1].description, "Dated description");
    }

    #[test]
    fn test_progress_list_placeholder() {
        assert_eq!(
            render_progress_list(&[]),
            ProgressListView::Placeholder {
                message: NO_PROGRESS
            }
        );
    }

    #[test]
    fn test_budget_table_rows() {
        let items = vec![budget(Category::Motor, 250.0), budget(Category::Paint, 99.999)];

        let TableView::Rows { rows } = render_budget_table(&items) else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Motor");
        assert_eq!(rows[0].cost, "$250.00");
        assert_eq!(rows[1].cost, "$100.00");
    }

    #[test]
    fn test_empty_tables_have_single_placeholder_row() {
        assert_eq!(
            render_budget_table::<BudgetItem>(&[]),
            TableView::Placeholder {
                message: NO_BUDGET_ITEMS,
                colspan: 3
            }
        );
        assert_eq!(
            render_wish_table::<WishItem>(&[]),
            TableView::Placeholder {
                message: NO_WISH_ITEMS,
                colspan: 3
            }
        );
    }

    #[test]
    fn test_totals_per_category_first_seen_order() {
        let items = vec![
            budget(Category::Paint, 5.0),
            budget(Category::Motor, 3.0),
            budget(Category::Paint, 2.0),
        ];

        let totals = render_budget_totals(&items);

        assert_eq!(
            totals.by_category,
            vec![
                CategoryTotal {
                    category: Category::Paint,
                    total: 7.0
                },
                CategoryTotal {
                    category: Category::Motor,
                    total: 3.0
                },
            ]
        );
        assert_eq!(totals.overall, 10.0);
        assert_eq!(
            totals.lines(),
            vec![
                "Paint: $7.00".to_string(),
                "Motor: $3.00".to_string(),
                "Overall total: $10.00".to_string(),
            ]
        );
    }

    #[test]
    fn test_totals_empty() {
        let totals = render_budget_totals::<BudgetItem>(&[]);

        assert!(totals.is_empty());
        assert_eq!(totals.overall, 0.0);
        assert_eq!(totals.lines(), vec![EMPTY_TOTAL.to_string()]);
    }

    #[test]
    fn test_gallery_keeps_insertion_order_and_skips_missing() {
        let updates = vec![update("1", "", "a"), update("2", "", ""), update("3", "", "b")];

        let GalleryView::Images { images } = render_gallery(&updates) else {
            panic!("expected images");
        };

        let srcs: Vec<&str> = images.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["a", "b"]);
        assert!(images.iter().all(|i| i.alt == GALLERY_ALT));
    }

    #[test]
    fn test_gallery_placeholder() {
        let updates = vec![update("no photo", "", "   ")];
        assert_eq!(
            render_gallery(&updates),
            GalleryView::Placeholder { message: NO_PHOTOS }
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let updates = vec![update("A", "2025-01-01", "a.jpg")];
        assert_eq!(render_progress_list(&updates), render_progress_list(&updates));
        assert_eq!(render_gallery(&updates), render_gallery(&updates));
    }
}
