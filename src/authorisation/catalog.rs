//! Built-in catalog of well-known advertiser brands.
//!
//! Billboards for these brands are treated as pre-authorised without a
//! registry entry. The catalog stores display names; matching always goes
//! through normalization, so punctuation and casing here are cosmetic.

/// Brands authorised out of the box.
pub static BRAND_CATALOG: &[&str] = &[
    "Pepsi",
    "Coca Cola",
    "Thums Up",
    "Sprite",
    "Fanta",
    "Amul",
    "Britannia",
    "Parle",
    "Cadbury",
    "Nestle",
    "McDonald's",
    "Domino's Pizza",
    "KFC",
    "Burger King",
    "Airtel",
    "Jio",
    "Vodafone Idea",
    "Samsung",
    "LG",
    "Sony",
    "Tata Motors",
    "Maruti Suzuki",
    "Hero MotoCorp",
    "Royal Enfield",
    "Flipkart",
    "Amazon",
    "Zomato",
    "Swiggy",
    "Paytm",
    "Nike",
    "Adidas",
    "Puma",
];

/// The built-in catalog as owned strings, ready for an engine.
pub fn builtin_catalog() -> Vec<String> {
    BRAND_CATALOG.iter().map(|s| s.to_string()).collect()
}
