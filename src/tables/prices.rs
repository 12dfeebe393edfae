use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChurrascoError, Result};
use crate::estimator::constants::{DEFAULT_MEAT_PRICE, DEFAULT_PREP_MINUTES, MAX_PREP_MINUTES};
use crate::models::{SideDish, Supply};

/// Unit prices and grill times, built once and shared read-only.
///
/// Unknown meats fall back to [`DEFAULT_MEAT_PRICE`] and [`DEFAULT_PREP_MINUTES`].
/// Side dishes and supplies have no fallback: a missing entry is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTables {
    /// Price per kg, keyed by meat tag.
    #[serde(rename = "carnes")]
    pub meats: BTreeMap<String, f64>,

    /// Price per unit of quantity, keyed by side dish tag.
    #[serde(rename = "acompanhamentos")]
    pub sides: BTreeMap<String, f64>,

    /// Drinks and charcoal, keyed by supply tag.
    #[serde(rename = "bebidas")]
    pub supplies: BTreeMap<String, f64>,

    /// Grill minutes, keyed by meat tag.
    #[serde(rename = "tempos_preparo")]
    pub prep_minutes: BTreeMap<String, u32>,
}

/// Re-key a table by trimmed, lowercase tag. Later keys win on collision.
fn normalize_keys<V>(table: BTreeMap<String, V>) -> BTreeMap<String, V> {
    let mut out = BTreeMap::new();
    for (tag, value) in table {
        let key = tag.trim().to_lowercase();
        if out.insert(key.clone(), value).is_some() {
            log::warn!("Duplicate price table tag '{}' after normalization", key);
        }
    }
    out
}

fn table<V: Copy>(entries: &[(&str, V)]) -> BTreeMap<String, V> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for PriceTables {
    fn default() -> Self {
        Self {
            meats: table(&[
                ("picanha", 80.0),
                ("frango", 20.0),
                ("linguica", 30.0),
                ("costela", 50.0),
            ]),
            sides: table(&[
                ("arroz", 8.0),
                ("farofa", 10.0),
                ("vinagrete", 5.0),
                ("pao_alho", 3.0),
            ]),
            supplies: table(&[
                ("cerveja", 3.0),
                ("refrigerante", 5.0),
                ("agua", 2.0),
                ("carvao", 5.0),
            ]),
            prep_minutes: table(&[
                ("picanha", 40),
                ("frango", 30),
                ("linguica", 20),
                ("costela", 120),
            ]),
        }
    }
}

impl PriceTables {
    /// Lowercase every tag so lookups match the tags requests are normalized to.
    pub fn normalized(self) -> Self {
        Self {
            meats: normalize_keys(self.meats),
            sides: normalize_keys(self.sides),
            supplies: normalize_keys(self.supplies),
            prep_minutes: normalize_keys(self.prep_minutes),
        }
    }

    /// Every meat with a configured price.
    pub fn meat_tags(&self) -> Vec<String> {
        self.meats.keys().cloned().collect()
    }

    /// Price per kg for a meat, or the default for unknown meats.
    pub fn meat_price(&self, meat: &str) -> f64 {
        match self.meats.get(meat) {
            Some(price) => *price,
            None => {
                log::debug!(
                    "No price for meat '{}', using default {}",
                    meat,
                    DEFAULT_MEAT_PRICE
                );
                DEFAULT_MEAT_PRICE
            }
        }
    }

    /// Grill minutes for a meat, or the default for unknown meats.
    pub fn prep_minutes_for(&self, meat: &str) -> u32 {
        self.prep_minutes
            .get(meat)
            .copied()
            .unwrap_or(DEFAULT_PREP_MINUTES)
    }

    pub fn side_price(&self, side: SideDish) -> Result<f64> {
        self.sides
            .get(side.tag())
            .copied()
            .ok_or_else(|| ChurrascoError::MissingPrice(side.tag().to_string()))
    }

    pub fn supply_price(&self, supply: Supply) -> Result<f64> {
        self.supplies
            .get(supply.tag())
            .copied()
            .ok_or_else(|| ChurrascoError::MissingPrice(supply.tag().to_string()))
    }

    /// Ensure every side dish and supply has a price.
    pub fn check_complete(&self) -> Result<()> {
        for side in SideDish::ALL {
            self.side_price(side)?;
        }
        for supply in Supply::ALL {
            self.supply_price(supply)?;
        }
        let negative = self
            .meats
            .iter()
            .chain(&self.sides)
            .chain(&self.supplies)
            .find(|(_, price)| !price.is_finite() || **price < 0.0);
        if let Some((tag, price)) = negative {
            return Err(ChurrascoError::InvalidInput(format!(
                "price for '{}' must be a non-negative number, got {}",
                tag, price
            )));
        }
        if let Some((tag, minutes)) = self
            .prep_minutes
            .iter()
            .find(|(_, minutes)| **minutes > MAX_PREP_MINUTES)
        {
            return Err(ChurrascoError::InvalidInput(format!(
                "grill time for '{}' must be at most {} minutes, got {}",
                tag, MAX_PREP_MINUTES, minutes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_complete() {
        let tables = PriceTables::default();
        assert!(tables.check_complete().is_ok());
        assert_eq!(tables.meat_tags().len(), 4);
    }

    #[test]
    fn test_unknown_meat_falls_back() {
        let tables = PriceTables::default();
        assert_eq!(tables.meat_price("picanha"), 80.0);
        assert_eq!(tables.meat_price("cordeiro"), DEFAULT_MEAT_PRICE);
        assert_eq!(tables.prep_minutes_for("costela"), 120);
        assert_eq!(tables.prep_minutes_for("cordeiro"), DEFAULT_PREP_MINUTES);
    }

    #[test]
    fn test_missing_supply_is_error() {
        let mut tables = PriceTables::default();
        tables.supplies.remove("carvao");

        assert!(matches!(
            tables.supply_price(Supply::Charcoal),
            Err(ChurrascoError::MissingPrice(ref tag)) if tag == "carvao"
        ));
        assert!(tables.check_complete().is_err());
    }

    #[test]
    fn test_normalized_lowercases_tags() {
        let mut tables = PriceTables::default();
        tables.meats.insert(" Cordeiro".to_string(), 95.0);
        tables.prep_minutes.insert("CORDEIRO".to_string(), 90);

        let tables = tables.normalized();
        assert_eq!(tables.meat_price("cordeiro"), 95.0);
        assert_eq!(tables.prep_minutes_for("cordeiro"), 90);
        assert!(!tables.meats.contains_key(" Cordeiro"));
    }

    #[test]
    fn test_excessive_prep_minutes_rejected() {
        let mut tables = PriceTables::default();
        tables.prep_minutes.insert("picanha".to_string(), u32::MAX);
        assert!(matches!(
            tables.check_complete(),
            Err(ChurrascoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut tables = PriceTables::default();
        tables.meats.insert("frango".to_string(), -1.0);
        assert!(matches!(
            tables.check_complete(),
            Err(ChurrascoError::InvalidInput(_))
        ));
    }
}
