// ─────────────────────────────────────────────────────────────────────────────
// Meat allocation (kg per guest, before splitting across meats)
// ─────────────────────────────────────────────────────────────────────────────

/// Standard menu: kg per adult.
pub const MEAT_KG_PER_ADULT: f64 = 0.4;

/// Standard menu: kg per child.
pub const MEAT_KG_PER_CHILD: f64 = 0.2;

/// Burger menu: kg per adult.
pub const BURGER_KG_PER_ADULT: f64 = 0.2;

/// Burger menu: kg per child.
pub const BURGER_KG_PER_CHILD: f64 = 0.1;

/// Garlic-bread menu: kg per adult.
pub const GARLIC_BREAD_KG_PER_ADULT: f64 = 0.1;

/// Garlic-bread menu: kg per child.
pub const GARLIC_BREAD_KG_PER_CHILD: f64 = 0.05;

// ─────────────────────────────────────────────────────────────────────────────
// Drinks
// ─────────────────────────────────────────────────────────────────────────────

/// Drink multiplier when party mode is on.
pub const PARTY_MULTIPLIER: f64 = 1.5;

/// Beer cans per adult.
pub const BEER_CANS_PER_ADULT: f64 = 2.0;

/// Soda liters per adult / child.
pub const SODA_L_PER_ADULT: f64 = 0.5;
pub const SODA_L_PER_CHILD: f64 = 0.7;

/// Water liters per adult / child.
pub const WATER_L_PER_ADULT: f64 = 0.4;
pub const WATER_L_PER_CHILD: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Charcoal
// ─────────────────────────────────────────────────────────────────────────────

/// Charcoal kg burned per kg of meat.
pub const CHARCOAL_KG_PER_MEAT_KG: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Lenient fallbacks for meats missing from the tables
// ─────────────────────────────────────────────────────────────────────────────

/// Unit price charged for a meat tag with no configured price.
pub const DEFAULT_MEAT_PRICE: f64 = 50.0;

/// Grill minutes assumed for a meat tag with no configured time.
pub const DEFAULT_PREP_MINUTES: u32 = 30;

/// Longest grill time a price table may configure for one meat (a full day).
pub const MAX_PREP_MINUTES: u32 = 24 * 60;

/// Reduction factor meaning "no budget scaling".
pub const NO_REDUCTION: f64 = 1.0;
