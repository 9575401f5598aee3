// 📓 Journal - application state and action dispatch
// One action at a time: validate → mutate → report which regions to redraw

use tracing::info;

use crate::error::ValidationError;
use crate::mutators::{add_budget_item, add_progress_update, add_wish_item, ItemForm, ProgressForm};
use crate::render::{
    render_budget_table, render_budget_totals, render_gallery, render_progress_list,
    render_wish_table, GalleryView, ProgressListView, Region, TableView, TotalsView,
};
use crate::seed::load_sample_data;
use crate::store::CollectionStore;
use crate::view::{BuildStory, HeroImage, TabBar};

/// Everything a user can trigger
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show the section with this id
    SelectTab(String),
    AddProgress(ProgressForm),
    AddBudget(ItemForm),
    AddWish(ItemForm),
    /// Show the image at this URL
    UpdateHero(String),
    ResetHero,
    RemoveHero,
    /// Replace the build story with this text
    UpdateStory(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectTab(_) => "select_tab",
            Action::AddProgress(_) => "add_progress",
            Action::AddBudget(_) => "add_budget",
            Action::AddWish(_) => "add_wish",
            Action::UpdateHero(_) => "update_hero",
            Action::ResetHero => "reset_hero",
            Action::RemoveHero => "remove_hero",
            Action::UpdateStory(_) => "update_story",
        }
    }
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Applied; these collection regions need a fresh render (may be empty)
    Applied(&'static [Region]),
    /// Rejected; nothing changed and the notice should be shown
    Rejected(ValidationError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn notice(&self) -> Option<String> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Rejected(err) => Some(err.to_string()),
        }
    }
}

impl From<Result<&'static [Region], ValidationError>> for Outcome {
    fn from(result: Result<&'static [Region], ValidationError>) -> Self {
        match result {
            Ok(regions) => Outcome::Applied(regions),
            Err(err) => Outcome::Rejected(err),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    pub store: CollectionStore,
    pub tabs: TabBar,
    pub hero: HeroImage,
    pub story: BuildStory,
    pub progress_form: ProgressForm,
    pub budget_form: ItemForm,
    pub wish_form: ItemForm,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data() -> Self {
        let mut journal = Self::new();
        load_sample_data(&mut journal.store);
        journal
    }

    /// Apply one action. Form actions replace the matching form with the submitted
    /// values first, so a rejected submission keeps what the user typed.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let name = action.name();

        let outcome: Outcome = match action {
            Action::SelectTab(target) => {
                self.tabs.select(&target);
                Outcome::Applied(&[])
            }
            Action::AddProgress(form) => {
                self.progress_form = form;
                add_progress_update(&mut self.store, &mut self.progress_form).into()
            }
            Action::AddBudget(form) => {
                self.budget_form = form;
                add_budget_item(&mut self.store, &mut self.budget_form).into()
            }
            Action::AddWish(form) => {
                self.wish_form = form;
                add_wish_item(&mut self.store, &mut self.wish_form).into()
            }
            Action::UpdateHero(url) => {
                self.hero.input = url;
                self.hero.update().map(|_| &[] as &'static [Region]).into()
            }
            Action::ResetHero => {
                self.hero.reset();
                Outcome::Applied(&[])
            }
            Action::RemoveHero => {
                self.hero.remove();
                Outcome::Applied(&[])
            }
            Action::UpdateStory(text) => {
                self.story.draft = text;
                self.story.update().map(|_| &[] as &'static [Region]).into()
            }
        };

        match &outcome {
            Outcome::Applied(regions) => info!(action = name, ?regions, "action applied"),
            Outcome::Rejected(err) => info!(action = name, reason = %err, "action rejected"),
        }

        outcome
    }

    // ------------------------------------------------------------------------
    // Region renderers over the current store
    // ------------------------------------------------------------------------

    pub fn progress_list(&self) -> ProgressListView {
        render_progress_list(self.store.progress())
    }

    pub fn gallery(&self) -> GalleryView {
        render_gallery(self.store.progress())
    }

    pub fn budget_table(&self) -> TableView {
        render_budget_table(self.store.budget())
    }

    pub fn budget_totals(&self) -> TotalsView {
        render_budget_totals(self.store.budget())
    }

    pub fn wish_table(&self) -> TableView {
        render_wish_table(self.store.wishlist())
    }
}
