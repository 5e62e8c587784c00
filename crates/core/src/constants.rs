//! Fixed keys, paths and lists

/// Storage key holding the signed-in role
pub const ROLE_STORAGE_KEY: &str = "userRole";

/// Path of the downloadable activity point guidelines
pub const GUIDELINES_PATH: &str = "/files/act.pdf";

/// Loading delay shown on every route change, in milliseconds
pub const ROUTE_TRANSITION_DELAY_MS: u64 = 1000;

pub const APP_TITLE: &str = "KTU Activity Points Manager";

pub const CERTIFICATE_CATEGORIES: [&str; 6] = [
    "NSS/NCC",
    "Sports",
    "Cultural Activities",
    "Professional Development",
    "Technical Events",
    "Other",
];

pub const DEPARTMENTS: [&str; 6] = [
    "Computer Science and Engineering",
    "Electronics and Communication Engineering",
    "Electrical and Electronics Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Information Technology",
];
