pub mod calculations;
pub mod constants;
pub mod engine;

pub use calculations::{
    budget_reduction_factor, calculate_charcoal, calculate_drinks, calculate_meat,
    calculate_sides, cost_per_payer, meat_baseline, preparation_minutes, side_quantities,
};
pub use constants::*;
pub use engine::Estimator;
