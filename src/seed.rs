// 🌱 Sample data so a fresh journal is not empty

use crate::models::{BudgetItem, Category, ProgressUpdate, WishItem};
use crate::store::CollectionStore;

pub fn sample_progress() -> Vec<ProgressUpdate> {
    vec![
        ProgressUpdate {
            date: "2024-06-26".to_string(),
            title: "Project Officially Begins".to_string(),
            description: "Today the journey to my dream car began with the purchase of this 1978 Camaro shell. \
                She was obviously not in the best shape considering that she was fully stripped down to an empty shell. \
                However, the biggest thing that mattered to me was that she wasn't rusted out. \
                In fact, the more I looked, the more I realized how killer the shape of this shell truly was. \
                So, I didn't even argue with the seller and paid him the 250 bucks he was asking. \
                We loaded it up onto my brother's flatbed with a tractor and made the journey home, both of us wearing big grins discussing what this car could become."
                .to_string(),
            image_url: "images/Day1.jpg".to_string(),
        },
        ProgressUpdate {
            date: "2025-06-15".to_string(),
            title: "First Trip to a Car Show".to_string(),
            description: "Well, after months of hard work, endless long nights, a lot of sweat, grit, and money later, I finally got to debut her as a running, driving car at the Father's Day Shakedown Car Show at the Waypoint Church in Springfield. \
                She was still very much a diamond in the rough, needed a ton of body work, and the seats were still terrible, but she drove under her own power. \
                Considering she had to be loaded on a trailer with a tractor just 6 months prior, I'd call that a win. \
                Next year she will be back, looking even better!"
                .to_string(),
            image_url: "images/Fathersday.jpg".to_string(),
        },
        ProgressUpdate {
            date: "2025-11-24".to_string(),
            title: "How She Currently Sits".to_string(),
            description: "At this point, most of the important metal work has been completed. \
                I changed the tail panel and quarter panel ends and modified the entire backend from the 1978 style to the 1971 rear end that I vastly prefer. \
                Sure, it will infuriate purists, especially once they learn that I cut up a perfectly solid, rust-free car—let alone a true Z28—to do so. \
                But they can cry; it's my car, and I'm thrilled with how it looks. \
                I consider it a fast improvement."
                .to_string(),
            image_url: "images/Current.jpg".to_string(),
        },
    ]
}

pub fn sample_budget() -> Vec<BudgetItem> {
    vec![
        BudgetItem {
            category: Category::Motor,
            item: "Bought Shell".to_string(),
            cost: 250.0,
        },
        BudgetItem {
            category: Category::Transmission,
            item: "Muncie 4-speed Transmission".to_string(),
            cost: 1200.0,
        },
        BudgetItem {
            category: Category::BodyWork,
            item: "Fenders (Pair)".to_string(),
            cost: 400.0,
        },
    ]
}

pub fn sample_wishlist() -> Vec<WishItem> {
    vec![
        WishItem {
            category: Category::Transmission,
            item: "TKO 5-Speed Conversion".to_string(),
            estimated_cost: 4600.0,
        },
        WishItem {
            category: Category::BodyWork,
            item: "L88 Hood".to_string(),
            estimated_cost: 1200.0,
        },
        WishItem {
            category: Category::Paint,
            item: "Seductive Red Paint (per gallon)".to_string(),
            estimated_cost: 900.0,
        },
    ]
}

/// Append every sample record to `store`
pub fn load_sample_data(store: &mut CollectionStore) {
    for update in sample_progress() {
        store.push_progress(update);
    }
    for item in sample_budget() {
        store.push_budget(item);
    }
    for item in sample_wishlist() {
        store.push_wish(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_budget_totals;

    #[test]
    fn test_sample_data_counts() {
        let mut store = CollectionStore::new();
        load_sample_data(&mut store);

        assert_eq!(store.progress().len(), 3);
        assert_eq!(store.budget().len(), 3);
        assert_eq!(store.wishlist().len(), 3);
    }

    #[test]
    fn test_sample_budget_total() {
        let totals = render_budget_totals(&sample_budget());
        assert_eq!(totals.overall, 1850.0);
        assert_eq!(totals.by_category.len(), 3);
    }

    #[test]
    fn test_sample_progress_all_have_photos() {
        assert!(sample_progress().iter().all(|p| p.image_url().is_some()));
    }

    #[test]
    fn test_sample_progress_keeps_full_stories() {
        let progress = sample_progress();

        assert!(progress[0].description.starts_with("Today the journey to my dream car began"));
        assert!(progress[0]
            .description
            .contains("paid him the 250 bucks he was asking. We loaded it up"));
        assert!(progress[1]
            .description
            .ends_with("Next year she will be back, looking even better!"));
        assert!(progress[2]
            .description
            .contains("a true Z28—to do so. But they can cry"));
        assert!(progress.iter().all(|p| !p.description.contains("  ")));
    }
}
