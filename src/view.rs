// 🧭 View Controller - tab bar, hero image, build story
// None of these touch the collections

use tracing::debug;

use crate::error::ValidationError;

pub const DEFAULT_HERO_SRC: &str = "images/hero.avif";

pub const DEFAULT_BUILD_STORY: &str = "It started with a stripped 1978 Camaro shell that \
had somehow escaped the rust. This is the story of turning it into the car I always wanted.";

// ============================================================================
// TABS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    BuildStory,
    Progress,
    Budget,
    WishList,
    Gallery,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::BuildStory,
        Tab::Progress,
        Tab::Budget,
        Tab::WishList,
        Tab::Gallery,
    ];

    /// Identifier of the section this tab shows
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::BuildStory => "build-story",
            Tab::Progress => "progress",
            Tab::Budget => "budget",
            Tab::WishList => "wishlist",
            Tab::Gallery => "gallery",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::BuildStory => "Build Story",
            Tab::Progress => "Progress",
            Tab::Budget => "Budget",
            Tab::WishList => "Wish List",
            Tab::Gallery => "Gallery",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Tab::ALL.iter().copied().find(|tab| tab.id() == id)
    }

    pub fn next(&self) -> Self {
        let idx = self.position();
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = self.position();
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    fn position(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Exactly one tab is active at any time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    active: Tab,
}

impl Default for TabBar {
    fn default() -> Self {
        Self { active: Tab::Home }
    }
}

impl TabBar {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Activate the tab whose section id matches `target_id`.
    /// Unknown ids leave the current selection in place and return false.
    pub fn select(&mut self, target_id: &str) -> bool {
        match Tab::from_id(target_id) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => {
                debug!(target_id, "ignoring unknown tab");
                false
            }
        }
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn next(&mut self) {
        self.active = self.active.next();
    }

    pub fn previous(&mut self) {
        self.active = self.active.previous();
    }
}

// ============================================================================
// HERO IMAGE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImage {
    src: String,
    visible: bool,
    /// Free-text URL input next to the image
    pub input: String,
}

impl Default for HeroImage {
    fn default() -> Self {
        Self {
            src: DEFAULT_HERO_SRC.to_string(),
            visible: true,
            input: String::new(),
        }
    }
}

impl HeroImage {
    /// Current image source, `None` once the image has been removed
    pub fn src(&self) -> Option<&str> {
        if self.visible && !self.src.is_empty() {
            Some(&self.src)
        } else {
            None
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn update(&mut self) -> Result<(), ValidationError> {
        let url = self.input.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyHeroUrl);
        }

        self.src = url.to_string();
        self.visible = true;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.src = DEFAULT_HERO_SRC.to_string();
        self.visible = true;
        self.input.clear();
    }

    pub fn remove(&mut self) {
        self.src.clear();
        self.visible = false;
    }
}

// ============================================================================
// BUILD STORY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStory {
    text: String,
    /// Edit surface, seeded from the displayed text
    pub draft: String,
}

impl Default for BuildStory {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_STORY)
    }
}

impl BuildStory {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        Self {
            draft: text.clone(),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self) -> Result<(), ValidationError> {
        let text = self.draft.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyBuildStory);
        }

        self.text = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_select_by_id() {
        let mut tabs = TabBar::default();
        assert_eq!(tabs.active(), Tab::Home);

        assert!(tabs.select("budget"));
        assert_eq!(tabs.active(), Tab::Budget);
        assert!(tabs.is_active(Tab::Budget));
        assert!(!tabs.is_active(Tab::Home));

        // Selecting again is a no-op
        assert!(tabs.select("budget"));
        assert_eq!(tabs.active(), Tab::Budget);
    }

    #[test]
    fn test_tab_select_unknown_keeps_selection() {
        let mut tabs = TabBar::default();
        tabs.select("gallery");

        assert!(!tabs.select("garage"));
        assert_eq!(tabs.active(), Tab::Gallery);
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let mut tabs = TabBar::default();
        for tab in Tab::ALL {
            tabs.activate(tab);
            let active = Tab::ALL.iter().filter(|t| tabs.is_active(**t)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_tab_cycle() {
        let mut tabs = TabBar::default();
        tabs.previous();
        assert_eq!(tabs.active(), Tab::Gallery);
        tabs.next();
        assert_eq!(tabs.active(), Tab::Home);
        tabs.next();
        assert_eq!(tabs.active(), Tab::BuildStory);
    }

    #[test]
    fn test_tab_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
    }

    #[test]
    fn test_hero_update_from_input() {
        let mut hero = HeroImage::default();
        hero.input = "  https://example.com/car.jpg ".to_string();

        hero.update().unwrap();

        assert_eq!(hero.src(), Some("https://example.com/car.jpg"));
        assert!(hero.is_visible());
    }

    #[test]
    fn test_hero_update_rejects_empty_input() {
        let mut hero = HeroImage::default();
        hero.input = "   ".to_string();

        assert_eq!(hero.update(), Err(ValidationError::EmptyHeroUrl));
        assert_eq!(hero.src(), Some(DEFAULT_HERO_SRC));
    }

    #[test]
    fn test_hero_remove_then_reset() {
        let mut hero = HeroImage::default();
        hero.input = "other.jpg".to_string();
        hero.update().unwrap();

        hero.remove();
        assert_eq!(hero.src(), None);
        assert!(!hero.is_visible());

        hero.reset();
        assert_eq!(hero.src(), Some(DEFAULT_HERO_SRC));
        assert!(hero.input.is_empty());
    }

    #[test]
    fn test_build_story_seeded_from_text() {
        let story = BuildStory::new("  Once upon a time  ");
        assert_eq!(story.text(), "Once upon a time");
        assert_eq!(story.draft, "Once upon a time");
    }

    #[test]
    fn test_build_story_update() {
        let mut story = BuildStory::default();
        story.draft = " New chapter ".to_string();

        story.update().unwrap();
        assert_eq!(story.text(), "New chapter");

        story.draft = "".to_string();
        assert_eq!(story.update(), Err(ValidationError::EmptyBuildStory));
        assert_eq!(story.text(), "New chapter");
    }
}
