pub mod config;
pub mod debounce;
pub mod effects;
pub mod filter;
pub mod modal;
pub mod notification;
pub mod validation;
