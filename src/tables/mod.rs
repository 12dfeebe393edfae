mod persistence;
mod prices;

pub use persistence::{load_tables, save_tables};
pub use prices::PriceTables;
