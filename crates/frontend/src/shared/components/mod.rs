pub mod count_up;
pub mod lazy_image;
pub mod pagination_controls;
pub mod reveal;
pub mod skills;
