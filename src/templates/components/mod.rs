pub mod filter_sidebar;
pub mod listing_card;
pub mod pagination;
pub mod quick_search;

pub use filter_sidebar::filter_sidebar;
pub use listing_card::listing_card;
pub use pagination::pagination;
pub use quick_search::quick_search_form;
