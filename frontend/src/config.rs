#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // Django dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const VAT_LOOKUP_PATH: &str = "/js/vat/";
pub const DONATE_PATH: &str = "/donate/new/";

// Django's CSRF form field and cookie
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

pub const MIN_DONATION: u32 = 5;
pub const DEFAULT_DONATION: u32 = 10;

/// (reward id, label, minimum amount in EUR)
pub const REWARD_LEVELS: &[(u8, &str, f64)] = &[
    (0, "No reward", 0.0),
    (1, "Name in the list of supporters", 100.0),
    (2, "Link in the list of supporters", 250.0),
    (3, "Logo and link on the website", 500.0),
];

pub const RECURRENCE_CHOICES: &[(&str, &str)] = &[
    ("y", "Annual"),
    ("b", "Biannual"),
    ("q", "Quarterly"),
    ("m", "Monthly"),
    ("", "One-time"),
];

pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("cs", "Čeština"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("fr", "Français"),
    ("pt", "Português"),
];

/// Countries offered in the billing country dropdown (ISO code, name).
pub const COUNTRIES: &[(&str, &str)] = &[
    ("AT", "Austria"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GR", "Greece"),
    ("HR", "Croatia"),
    ("HU", "Hungary"),
    ("IE", "Ireland"),
    ("IT", "Italy"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("MT", "Malta"),
    ("NL", "Netherlands"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SE", "Sweden"),
    ("SI", "Slovenia"),
    ("SK", "Slovakia"),
    // Outside the EU, invoiced without VAT lookup
    ("AU", "Australia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CN", "China"),
    ("GB", "United Kingdom"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IS", "Iceland"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("LI", "Liechtenstein"),
    ("NO", "Norway"),
    ("NZ", "New Zealand"),
    ("RS", "Serbia"),
    ("SG", "Singapore"),
    ("TR", "Turkey"),
    ("UA", "Ukraine"),
    ("US", "United States"),
    ("ZA", "South Africa"),
];
