pub mod breakdown;
pub mod request;

pub use breakdown::{Breakdown, DrinkEstimate, ShoppingList};
pub use request::{EstimateRequest, EventRequest, MenuType, SideDish, Supply};
