//! Shared, DOM-free building blocks of the portfolio site.
//!
//! Everything here compiles for the host target so the state machines
//! (modal group, filters, debouncer, form validation) are unit-tested
//! without a browser. The `frontend` crate wires them to Leptos signals.

pub mod domain;
pub mod shared;
