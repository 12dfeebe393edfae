use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Drink quantities and their combined price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrinkEstimate {
    #[serde(rename = "cerveja_latas")]
    pub beer_cans: f64,

    #[serde(rename = "refrigerante_litros")]
    pub soda_liters: f64,

    #[serde(rename = "agua_litros")]
    pub water_liters: f64,

    #[serde(rename = "preco_bebidas")]
    pub price: f64,
}

/// Human-readable quantities, formatted from an already computed estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(rename = "carnes")]
    pub meats: BTreeMap<String, String>,

    #[serde(rename = "bebidas")]
    pub drinks: BTreeMap<String, String>,

    #[serde(rename = "acompanhamentos")]
    pub sides: BTreeMap<String, String>,

    #[serde(rename = "carvao")]
    pub charcoal: String,
}

impl ShoppingList {
    /// Format the list. Meat mass is split evenly across `meats`.
    pub fn project(
        meats: &[String],
        total_meat_kg: f64,
        drinks: &DrinkEstimate,
        sides: &BTreeMap<String, f64>,
        charcoal_kg: f64,
    ) -> Self {
        let per_meat = if meats.is_empty() {
            0.0
        } else {
            total_meat_kg / meats.len() as f64
        };

        let meats = meats
            .iter()
            .map(|m| (m.clone(), format!("{:.2} kg", per_meat)))
            .collect();

        let drinks = [
            ("cerveja_latas", drinks.beer_cans),
            ("refrigerante_litros", drinks.soda_liters),
            ("agua_litros", drinks.water_liters),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), format!("{:.1}", v)))
        .collect();

        let sides = sides
            .iter()
            .map(|(k, v)| (k.clone(), format!("{:.2}", v)))
            .collect();

        Self {
            meats,
            drinks,
            sides,
            charcoal: format!("{:.2} kg", charcoal_kg),
        }
    }

    /// Flatten into (category, item, quantity) rows.
    pub fn rows(&self) -> Vec<(&'static str, String, String)> {
        let mut rows = Vec::new();
        for (item, qty) in &self.meats {
            rows.push(("carnes", item.clone(), qty.clone()));
        }
        for (item, qty) in &self.drinks {
            rows.push(("bebidas", item.clone(), qty.clone()));
        }
        for (item, qty) in &self.sides {
            rows.push(("acompanhamentos", item.clone(), qty.clone()));
        }
        rows.push(("carvao", "carvao".to_string(), self.charcoal.clone()));
        rows
    }
}

/// Full itemized estimate for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(rename = "total_carne_kg")]
    pub total_meat_kg: f64,

    #[serde(rename = "preco_carne")]
    pub meat_price: f64,

    #[serde(rename = "bebidas")]
    pub drinks: DrinkEstimate,

    /// Quantities for the selected side dishes only, keyed by tag.
    #[serde(rename = "acompanhamentos")]
    pub sides: BTreeMap<String, f64>,

    #[serde(rename = "preco_acompanhamentos")]
    pub sides_price: f64,

    #[serde(rename = "carvao_kg")]
    pub charcoal_kg: f64,

    #[serde(rename = "preco_carvao")]
    pub charcoal_price: f64,

    /// Grill time in minutes.
    #[serde(rename = "tempo_preparo")]
    pub prep_minutes: u32,

    #[serde(rename = "preco_total")]
    pub total_price: f64,

    #[serde(rename = "lista_compras")]
    pub shopping_list: ShoppingList,

    #[serde(rename = "custo_por_pessoa")]
    pub cost_per_payer: f64,

    #[serde(rename = "ajustado_orcamento")]
    pub budget_adjusted: bool,

    #[serde(rename = "fator_reducao")]
    pub reduction_factor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_drinks() -> DrinkEstimate {
        DrinkEstimate {
            beer_cans: 20.0,
            soda_liters: 8.5,
            water_liters: 6.5,
            price: 115.5,
        }
    }

    #[test]
    fn test_project_formats_quantities() {
        let meats = vec!["frango".to_string(), "picanha".to_string()];
        let mut sides = BTreeMap::new();
        sides.insert("arroz".to_string(), 1.25);

        let list = ShoppingList::project(&meats, 5.0, &sample_drinks(), &sides, 6.0);

        assert_eq!(list.meats["frango"], "2.50 kg");
        assert_eq!(list.meats["picanha"], "2.50 kg");
        assert_eq!(list.drinks["cerveja_latas"], "20.0");
        assert_eq!(list.drinks["refrigerante_litros"], "8.5");
        assert_eq!(list.sides["arroz"], "1.25");
        assert_eq!(list.charcoal, "6.00 kg");
    }

    #[test]
    fn test_rows_cover_every_item() {
        let meats = vec!["costela".to_string()];
        let list = ShoppingList::project(&meats, 1.0, &sample_drinks(), &BTreeMap::new(), 1.2);
        let rows = list.rows();

        // 1 meat + 3 drinks + 0 sides + charcoal
        assert_eq!(rows.len(), 5);
        assert_eq!(rows.last().unwrap().2, "1.20 kg");
    }

    #[test]
    fn test_drinks_wire_names() {
        let json = serde_json::to_value(sample_drinks()).unwrap();
        assert_eq!(json["cerveja_latas"], 20.0);
        assert_eq!(json["preco_bebidas"], 115.5);
    }
}
