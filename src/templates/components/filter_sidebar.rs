use crate::domain::criteria::{Category, Criteria, PreferenceFilter};
use crate::geos;
use maud::{html, Markup};

const PROPERTY_TYPES: &[&str] = &[
    "Apartment",
    "Independent House",
    "Villa",
    "Plot",
    "Office Space",
    "Shop",
    "Warehouse",
];

const FURNISHING: &[&str] = &["unfurnished", "semi-furnished", "furnished"];

const AMENITIES: &[&str] = &[
    "lift",
    "parking",
    "power-backup",
    "security",
    "gym",
    "swimming-pool",
];

const AVAILABILITY: &[&str] = &["ready-to-move", "under-construction"];

const AGE_RANGES: &[&str] = &["0-1", "1-5", "5-10", "10+"];

/// Detailed sidebar filter. This is the only source that can set the
/// extended facets, and the only one re-applicable in place.
pub fn filter_sidebar(criteria: Option<&Criteria>) -> Markup {
    let category = criteria.map_or(Category::All, |c| c.category);
    let preference = criteria.map_or(PreferenceFilter::All, |c| c.preference);
    let has_type =
        |ty: &str| criteria.is_some_and(|c| c.property_types.iter().any(|t| t == ty));
    let min_price = criteria.and_then(|c| c.price.min);
    let max_price = criteria.and_then(|c| c.price.max);
    let state_iso = criteria.and_then(|c| c.geo.state_iso.as_deref());
    let city = criteria.and_then(|c| c.geo.city.as_deref());

    let facets = criteria.and_then(|c| c.facets.as_ref());
    let furnishing = facets.and_then(|f| f.furnishing.as_deref());
    let has_amenity = |a: &str| facets.is_some_and(|f| f.amenities.iter().any(|x| x == a));
    let availability = facets.and_then(|f| f.availability.as_deref());
    let min_area = facets.and_then(|f| f.area.min);
    let max_area = facets.and_then(|f| f.area.max);
    let has_age = |r: &str| facets.is_some_and(|f| f.age_ranges.iter().any(|x| x == r));

    html! {
        aside class="filter-sidebar" {
            form action="/filter" method="get" {
                fieldset {
                    legend { "Category" }
                    select name="category" {
                        option value="all" selected[category == Category::All] { "All" }
                        option value="residential" selected[category == Category::Residential] { "Residential" }
                        option value="commercial" selected[category == Category::Commercial] { "Commercial" }
                    }
                }

                fieldset {
                    legend { "Looking to" }
                    select name="preference" {
                        option value="all" selected[preference == PreferenceFilter::All] { "All" }
                        option value="buy" selected[preference == PreferenceFilter::Buy] { "Buy" }
                        option value="rent" selected[preference == PreferenceFilter::Rent] { "Rent" }
                        option value="pg" selected[preference == PreferenceFilter::Pg] { "PG" }
                    }
                }

                fieldset {
                    legend { "Property type" }
                    @for &ty in PROPERTY_TYPES {
                        label { input type="checkbox" name="types" value=(ty) checked[has_type(ty)]; (ty) }
                    }
                }

                fieldset {
                    legend { "Price (₹)" }
                    input type="number" name="min_price" min="0" placeholder="Min" value=[min_price];
                    input type="number" name="max_price" min="0" placeholder="Max" value=[max_price];
                }

                fieldset {
                    legend { "Location" }
                    select name="state" {
                        option value="" selected[state_iso.is_none()] { "Any state" }
                        @for (abbr, name) in geos::IN_STATES {
                            option value=(abbr) selected[state_iso == Some(*abbr)] { (name) }
                        }
                    }
                    input type="text" name="city" placeholder="City" value=[city];
                }

                fieldset {
                    legend { "Furnishing" }
                    select name="furnishing" {
                        option value="" selected[furnishing.is_none()] { "Any" }
                        @for &f in FURNISHING {
                            option value=(f) selected[furnishing == Some(f)] { (f) }
                        }
                    }
                }

                fieldset {
                    legend { "Amenities" }
                    @for &a in AMENITIES {
                        label { input type="checkbox" name="amenities" value=(a) checked[has_amenity(a)]; (a) }
                    }
                }

                fieldset {
                    legend { "Availability" }
                    select name="availability" {
                        option value="" selected[availability.is_none()] { "Any" }
                        @for &av in AVAILABILITY {
                            option value=(av) selected[availability == Some(av)] { (av) }
                        }
                    }
                }

                fieldset {
                    legend { "Area (sq.ft.)" }
                    input type="number" name="min_area" min="0" placeholder="Min" value=[min_area];
                    input type="number" name="max_area" min="0" placeholder="Max" value=[max_area];
                }

                fieldset {
                    legend { "Property age (years)" }
                    @for &r in AGE_RANGES {
                        label { input type="checkbox" name="ages" value=(r) checked[has_age(r)]; (r) }
                    }
                }

                button type="submit" { "Apply Filters" }
            }
        }
    }
}
