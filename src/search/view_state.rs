// src/search/view_state.rs

/// Sort order for the visible result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Newest,
    PriceAsc,
    PriceDesc,
    AreaAsc,
    AreaDesc,
}

impl SortKey {
    /// URL-param round trip. Unknown values fall back to Newest.
    pub fn from_param(param: &str) -> Self {
        match param {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "area_asc" => SortKey::AreaAsc,
            "area_desc" => SortKey::AreaDesc,
            _ => SortKey::Newest,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::AreaAsc => "area_asc",
            SortKey::AreaDesc => "area_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::AreaAsc => "Area: small to large",
            SortKey::AreaDesc => "Area: large to small",
        }
    }

    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::AreaAsc,
        SortKey::AreaDesc,
    ];
}

/// Client-only display state. Independent of Criteria: changing it never
/// triggers an upstream call, it only re-derives the visible slice.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub sort: SortKey,
    /// Zero-based page index.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortKey::Newest,
            page: 0,
        }
    }
}

impl ViewState {
    /// Applied whenever the active Criteria changes: the query is cleared
    /// and the page snaps back to the start. The sort key survives.
    pub fn reset(&mut self) {
        self.query.clear();
        self.page = 0;
    }
}
