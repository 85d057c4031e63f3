//! Trailing-edge debouncing by generation counting.
//!
//! Each [`Debouncer::schedule`] returns a ticket and invalidates every ticket
//! issued before it. The caller waits out the quiet period (a timer, in the
//! browser) and then asks [`Debouncer::fire`] whether its ticket is still
//! the latest; only that one runs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new quiet period, superseding any pending one.
    pub fn schedule(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket(self.generation)
    }

    /// Consumes `ticket` if it is the latest pending one.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{FilterEngine, Filterable};

    struct Post(&'static str);

    impl Filterable for Post {
        fn category(&self) -> &str {
            "blog"
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule();
        let second = debouncer.schedule();

        assert!(!debouncer.fire(first));
        assert!(debouncer.fire(second));
        assert!(!debouncer.fire(second));
    }

    #[test]
    fn test_rapid_terms_recompute_once_with_last_term() {
        let mut engine = FilterEngine::new(vec![Post("rust"), Post("react"), Post("ruby")]);
        let baseline = engine.evaluations();
        let mut debouncer = Debouncer::new();

        // keystrokes inside one quiet period; every timer then elapses in order
        let pending: Vec<(Ticket, &str)> = ["r", "re", "rea", "reac"]
            .into_iter()
            .map(|term| (debouncer.schedule(), term))
            .collect();
        for (ticket, term) in pending {
            if debouncer.fire(ticket) {
                engine.set_search_term(term);
            }
        }

        assert_eq!(engine.evaluations(), baseline + 1);
        assert_eq!(engine.state().search_term(), "reac");
        assert_eq!(engine.visibility(), &[false, true, false]);
    }
}
