pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{filter_sidebar, listing_card, pagination, quick_search_form};
pub use layouts::desktop::desktop_layout;
