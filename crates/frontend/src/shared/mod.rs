pub mod components;
pub mod dom;
pub mod filter;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notification;
pub mod observer;
