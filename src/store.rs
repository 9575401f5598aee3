// 🗄️ Collection Store - three append-only, insertion-ordered collections
// Lives for the whole process; nothing is written anywhere

use crate::models::{BudgetItem, ProgressUpdate, WishItem};

#[derive(Debug, Default, Clone)]
pub struct CollectionStore {
    progress: Vec<ProgressUpdate>,
    budget: Vec<BudgetItem>,
    wishlist: Vec<WishItem>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> &[ProgressUpdate] {
        &self.progress
    }

    pub fn budget(&self) -> &[BudgetItem] {
        &self.budget
    }

    pub fn wishlist(&self) -> &[WishItem] {
        &self.wishlist
    }

    // Appends are crate-private: only mutators (after validation) and seeding add records

    pub(crate) fn push_progress(&mut self, update: ProgressUpdate) -> &ProgressUpdate {
        self.progress.push(update);
        &self.progress[self.progress.len() - 1]
    }

    pub(crate) fn push_budget(&mut self, item: BudgetItem) -> &BudgetItem {
        self.budget.push(item);
        &self.budget[self.budget.len() - 1]
    }

    pub(crate) fn push_wish(&mut self, item: WishItem) -> &WishItem {
        self.wishlist.push(item);
        &self.wishlist[self.wishlist.len() - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.progress.is_empty() && self.budget.is_empty() && self.wishlist.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_new_store_is_empty() {
        let store = CollectionStore::new();
        assert!(store.is_empty());
        assert!(store.progress().is_empty());
        assert!(store.budget().is_empty());
        assert!(store.wishlist().is_empty());
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut store = CollectionStore::new();
        for name in ["first", "second", "third"] {
            store.push_budget(BudgetItem {
                category: Category::Other,
                item: name.to_string(),
                cost: 1.0,
            });
        }

        let names: Vec<&str> = store.budget().iter().map(|b| b.item.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(!store.is_empty());
    }
}
