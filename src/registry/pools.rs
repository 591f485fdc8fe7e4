//! Fixed word pools the string generators draw from.
//!
//! These are plain data. Swapping or extending a pool changes the values
//! produced but not the shape of any field type.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark",
    "Margaret", "Priya", "Kenji", "Amara", "Lucas",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "O'Brien", "Nakamura",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.test",
    "inbox.test",
    "company.test",
];

pub const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
    "Sunset", "River", "Church", "Highland", "Meadow", "Forest",
];

pub const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Ct", "Way"];

pub const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "Austin",
    "Seattle",
    "Denver",
    "Boston",
    "Portland",
    "Atlanta",
    "Miami",
];

pub const STATES: &[&str] = &[
    "California",
    "Texas",
    "Florida",
    "New York",
    "Illinois",
    "Pennsylvania",
    "Ohio",
    "Georgia",
    "Washington",
    "Colorado",
    "Oregon",
    "Arizona",
    "Massachusetts",
    "Michigan",
];

pub const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Netherlands",
    "Sweden",
    "Norway",
    "Japan",
    "Australia",
    "Brazil",
    "Mexico",
    "India",
    "South Africa",
];

pub const COMPANY_PREFIXES: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne", "Cyberdyne", "Soylent", "Hooli",
    "Vandelay", "Wonka", "Tyrell", "Aperture", "Blue Sun",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc",
    "LLC",
    "Corp",
    "Group",
    "Labs",
    "Industries",
    "Systems",
    "Holdings",
    "& Co",
];

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Analyst",
    "UX Designer",
    "Marketing Manager",
    "Sales Representative",
    "Customer Support Specialist",
    "Operations Manager",
    "Accountant",
    "HR Coordinator",
    "DevOps Engineer",
    "QA Engineer",
    "Technical Writer",
    "Chief Executive Officer",
];

pub const URL_WORDS: &[&str] = &[
    "alpha", "bright", "cloud", "delta", "echo", "forge", "grove", "harbor", "ion", "jet",
    "kite", "lumen", "nova", "orbit", "pixel", "quartz",
];

pub const TOP_LEVEL_DOMAINS: &[&str] = &["com", "net", "org", "io", "dev", "test"];

pub const URL_PATHS: &[&str] = &[
    "", "about", "products", "blog", "contact", "docs", "pricing", "careers",
];

pub const PASSWORD_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";
