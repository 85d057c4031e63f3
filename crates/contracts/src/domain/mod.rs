pub mod blog;
pub mod detail;
pub mod portfolio;
