// Build Journal - Core Library
// Store, mutators and renderers shared by the terminal UI and the web server

pub mod error;
pub mod models;
pub mod store;
pub mod format;
pub mod mutators;
pub mod render;
pub mod view;
pub mod journal;
pub mod seed;
pub mod html;
pub mod config;
pub mod logging;

// Only compile surfaces whose feature is enabled
#[cfg(feature = "tui")]
pub mod ui;
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use error::ValidationError;
pub use models::{BudgetItem, Category, CostedItem, ProgressUpdate, WishItem};
pub use store::CollectionStore;
pub use format::{format_currency, parse_cost};
pub use mutators::{add_budget_item, add_progress_update, add_wish_item, ItemForm, ProgressForm};
pub use render::{
    render_budget_table, render_budget_totals, render_gallery, render_progress_list,
    render_wish_table, GalleryView, ProgressListView, Region, TableView, TotalsView,
};
pub use view::{BuildStory, HeroImage, Tab, TabBar, DEFAULT_HERO_SRC};
pub use journal::{Action, Journal, Outcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
