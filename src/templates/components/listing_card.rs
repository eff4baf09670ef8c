use crate::domain::listing::{KindDetails, Listing};
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="listing-card" {
            @if let Some(img) = listing.primary_image() {
                img class="listing-photo" src=(img.url) alt=(listing.title);
            }

            div class="listing-body" {
                header {
                    h3 { (listing.title) }
                    span class="badge kind" { (listing.kind()) }
                    @if let Some(pref) = listing.preference {
                        span class="badge pref" { (pref.label()) }
                    }
                }

                p class="price" {
                    @match listing.price {
                        Some(price) => { "₹ " (price) },
                        None => { "Price on request" },
                    }
                }

                p class="location" { (location_line(listing)) }

                p class="facts" { (facts_line(listing)) }

                footer {
                    @if listing.verified { span class="tag verified" { "Verified" } }
                    @if listing.featured { span class="tag featured" { "Featured" } }
                }
            }
        }
    }
}

fn location_line(listing: &Listing) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in [&listing.locality, &listing.city, &listing.state] {
        if !part.is_empty() {
            parts.push(part);
        }
    }
    parts.join(", ")
}

fn facts_line(listing: &Listing) -> String {
    let mut facts: Vec<String> = Vec::new();

    if !listing.property_type.is_empty() {
        facts.push(listing.property_type.clone());
    }

    match &listing.details {
        KindDetails::Residential(d) => {
            if let Some(beds) = d.bedrooms {
                facts.push(format!("{beds} bed"));
            }
            if let Some(baths) = d.bathrooms {
                facts.push(format!("{baths} bath"));
            }
        }
        KindDetails::Commercial(d) => {
            if let Some(cabins) = d.cabins {
                facts.push(format!("{cabins} cabins"));
            }
            if d.meeting_room == Some(true) {
                facts.push("meeting room".into());
            }
            if d.washroom == Some(true) {
                facts.push("washroom".into());
            }
        }
    }

    if let Some(area) = listing.area {
        facts.push(format!("{area} sq.ft."));
    }

    facts.join(" · ")
}
