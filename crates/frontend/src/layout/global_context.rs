use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

/// Page-wide state shared by the layout and the sections.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: RwSignal<SiteConfig>,
    /// Id of the section currently highlighted in the navigation.
    pub active_section: RwSignal<String>,
    pub menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: RwSignal::new(config),
            active_section: RwSignal::new("home".to_string()),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }
}
