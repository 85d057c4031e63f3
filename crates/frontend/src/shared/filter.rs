//! Reactive wrapper around [`FilterEngine`]: one controller per grid.

use contracts::shared::debounce::Debouncer;
use contracts::shared::filter::{FilterEngine, Filterable};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub struct FilterController<T: Send + Sync + 'static> {
    engine: RwSignal<FilterEngine<T>>,
    debouncer: StoredValue<Debouncer>,
    debounce_ms: StoredValue<u32>,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    name: &'static str,
}

impl<T: Send + Sync + 'static> Clone for FilterController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FilterController<T> {}

impl<T: Filterable + Send + Sync + 'static> FilterController<T> {
    pub fn new(name: &'static str, items: Vec<T>, debounce_ms: u32) -> Self {
        Self::from_engine(name, FilterEngine::new(items), debounce_ms)
    }

    pub fn paginated(name: &'static str, items: Vec<T>, page_size: usize, debounce_ms: u32) -> Self {
        Self::from_engine(name, FilterEngine::paginated(items, page_size), debounce_ms)
    }

    fn from_engine(name: &'static str, engine: FilterEngine<T>, debounce_ms: u32) -> Self {
        Self {
            engine: RwSignal::new(engine),
            debouncer: StoredValue::new(Debouncer::new()),
            debounce_ms: StoredValue::new(debounce_ms),
            pending: StoredValue::new_local(None),
            name,
        }
    }

    pub fn set_category(&self, category: &str) {
        log::debug!("{}: category -> {}", self.name, category);
        self.engine.update(|e| e.set_category(category));
    }

    /// Input-driven search: applied once the input has been quiet for the
    /// debounce period. Each keystroke clears the running timer and starts a
    /// new one, so only the last term of a burst is applied.
    pub fn search_input(&self, term: String) {
        let Some(ticket) = self.debouncer.try_update_value(|d| d.schedule()) else {
            return;
        };
        let ctrl = *self;
        let timeout = Timeout::new(self.debounce_ms.get_value(), move || {
            let latest = ctrl
                .debouncer
                .try_update_value(|d| d.fire(ticket))
                .unwrap_or(false);
            if latest {
                log::debug!("{}: search -> {:?}", ctrl.name, term.trim());
                ctrl.engine.update(|e| e.set_search_term(&term));
            }
        });
        // dropping the previous `Timeout` clears it
        self.pending.set_value(Some(timeout));
    }

    pub fn set_page(&self, page: usize) {
        self.engine.update(|e| e.set_page(page));
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.engine.with(|e| e.is_visible(index))
    }

    pub fn active_category(&self) -> String {
        self.engine.with(|e| e.state().active_category().to_string())
    }

    pub fn search_term(&self) -> String {
        self.engine.with(|e| e.state().search_term().to_string())
    }

    pub fn page(&self) -> usize {
        self.engine.with(|e| e.page())
    }

    pub fn total_pages(&self) -> usize {
        self.engine.with(|e| e.total_pages())
    }

    pub fn match_count(&self) -> usize {
        self.engine.with(|e| e.match_count())
    }

    /// Reads an item without subscribing; items never change.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.engine.with_untracked(|e| f(e.items()))
    }
}
