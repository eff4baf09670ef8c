// src/geos.rs

/// Indian states and union territories as (ISO 3166-2 code, display name).
/// Used by the explorer/filter forms and for breadcrumb text.
pub const IN_STATES: &[(&str, &str)] = &[
    ("AP", "Andhra Pradesh"),
    ("AR", "Arunachal Pradesh"),
    ("AS", "Assam"),
    ("BR", "Bihar"),
    ("CT", "Chhattisgarh"),
    ("DL", "Delhi"),
    ("GA", "Goa"),
    ("GJ", "Gujarat"),
    ("HR", "Haryana"),
    ("HP", "Himachal Pradesh"),
    ("JH", "Jharkhand"),
    ("KA", "Karnataka"),
    ("KL", "Kerala"),
    ("MP", "Madhya Pradesh"),
    ("MH", "Maharashtra"),
    ("MN", "Manipur"),
    ("ML", "Meghalaya"),
    ("MZ", "Mizoram"),
    ("NL", "Nagaland"),
    ("OR", "Odisha"),
    ("PB", "Punjab"),
    ("RJ", "Rajasthan"),
    ("SK", "Sikkim"),
    ("TN", "Tamil Nadu"),
    ("TG", "Telangana"),
    ("TR", "Tripura"),
    ("UP", "Uttar Pradesh"),
    ("UT", "Uttarakhand"),
    ("WB", "West Bengal"),
];

/// Look up a display name for a state code ("MH" -> "Maharashtra").
pub fn state_name(code: &str) -> Option<&'static str> {
    IN_STATES
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}
