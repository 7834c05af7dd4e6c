//! Categorical value domains for the generated tables.

/// Sentinel food item meaning the transaction had no food purchase.
pub const NO_FOOD: &str = "None";

pub const DRINK_TYPES: &[&str] = &[
    "Latte",
    "Cappuccino",
    "Americano",
    "Espresso",
    "Frappuccino",
    "Cold Brew",
    "Mocha",
    "Tea",
    "Hot Chocolate",
];

/// Food menu including the no-food sentinel, sampled uniformly as one domain.
pub const FOOD_ITEMS: &[&str] = &[
    NO_FOOD,
    "Croissant",
    "Muffin",
    "Sandwich",
    "Cake Pop",
    "Cookie",
    "Bagel",
    "Protein Box",
    "Oatmeal",
];

pub const STORE_LOCATIONS: &[&str] = &[
    "Mall",
    "Street Corner",
    "Airport",
    "Drive-thru",
    "University Campus",
];

pub const STORE_TYPES: &[&str] = &[
    "High Traffic",
    "Suburban",
    "Urban Core",
    "Travel",
    "University",
];

pub const OCCUPATIONS: &[&str] = &[
    "Student",
    "Professional",
    "Manager",
    "Teacher",
    "Healthcare",
    "Technology",
    "Sales",
    "Retired",
    "Other",
];

pub const EDUCATION_LEVELS: &[&str] = &[
    "High School",
    "Some College",
    "Bachelor",
    "Master",
    "PhD",
];

/// Customer-side location types, a distinct domain from store locations.
pub const CUSTOMER_LOCATIONS: &[&str] = &["Urban", "Suburban", "Rural"];

/// Value domains held by the dataset generator.
#[derive(Debug, Clone)]
pub struct Domains {
    pub drink_types: &'static [&'static str],
    pub food_items: &'static [&'static str],
    pub store_locations: &'static [&'static str],
    pub store_types: &'static [&'static str],
    pub occupations: &'static [&'static str],
    pub education_levels: &'static [&'static str],
    pub customer_locations: &'static [&'static str],
}

impl Default for Domains {
    fn default() -> Self {
        Self {
            drink_types: DRINK_TYPES,
            food_items: FOOD_ITEMS,
            store_locations: STORE_LOCATIONS,
            store_types: STORE_TYPES,
            occupations: OCCUPATIONS,
            education_levels: EDUCATION_LEVELS,
            customer_locations: CUSTOMER_LOCATIONS,
        }
    }
}
