use std::collections::BTreeMap;

use crate::error::Result;
use crate::estimator::constants::*;
use crate::models::{DrinkEstimate, MenuType, SideDish, Supply};
use crate::tables::PriceTables;

/// Per-adult and per-child meat allocation (kg) for a menu.
pub fn meat_baseline(menu: MenuType) -> (f64, f64) {
    match menu {
        MenuType::Burger => (BURGER_KG_PER_ADULT, BURGER_KG_PER_CHILD),
        MenuType::GarlicBread => (GARLIC_BREAD_KG_PER_ADULT, GARLIC_BREAD_KG_PER_CHILD),
        MenuType::Complete | MenuType::Standard => (MEAT_KG_PER_ADULT, MEAT_KG_PER_CHILD),
    }
}

/// Calculate meat mass and price.
///
/// The baseline is split evenly across `meats`, so every meat gets the same mass.
/// Returns (total_kg, total_price). An empty selection yields (0, 0).
pub fn calculate_meat(
    adults: u32,
    children: u32,
    menu: MenuType,
    meats: &[String],
    tables: &PriceTables,
    reduction: f64,
) -> (f64, f64) {
    let (per_adult, per_child) = meat_baseline(menu);
    let count = meats.len() as f64;

    let mut total_kg = 0.0;
    let mut price = 0.0;
    for meat in meats {
        let adult_kg = (adults as f64 * per_adult / count) * reduction;
        let child_kg = (children as f64 * per_child / count) * reduction;
        let kg = adult_kg + child_kg;
        total_kg += kg;
        price += kg * tables.meat_price(meat);
    }

    (total_kg, price)
}

/// Calculate drink quantities and price. Party mode multiplies everything by 1.5.
pub fn calculate_drinks(
    adults: u32,
    children: u32,
    party_mode: bool,
    tables: &PriceTables,
    reduction: f64,
) -> Result<DrinkEstimate> {
    let multiplier = if party_mode { PARTY_MULTIPLIER } else { 1.0 };
    let adults = adults as f64;
    let children = children as f64;

    let beer_cans = (adults * BEER_CANS_PER_ADULT * multiplier) * reduction;
    let soda_liters =
        ((adults * SODA_L_PER_ADULT + children * SODA_L_PER_CHILD) * multiplier) * reduction;
    let water_liters =
        ((adults * WATER_L_PER_ADULT + children * WATER_L_PER_CHILD) * multiplier) * reduction;

    let price = beer_cans * tables.supply_price(Supply::Beer)?
        + soda_liters * tables.supply_price(Supply::Soda)?
        + water_liters * tables.supply_price(Supply::Water)?;

    Ok(DrinkEstimate {
        beer_cans,
        soda_liters,
        water_liters,
        price,
    })
}

/// Quantities for every known side dish, whether selected or not.
pub fn side_quantities(adults: u32, children: u32, reduction: f64) -> BTreeMap<SideDish, f64> {
    SideDish::ALL
        .into_iter()
        .map(|side| {
            let qty = (adults as f64 * side.per_adult() + children as f64 * side.per_child())
                * reduction;
            (side, qty)
        })
        .collect()
}

/// Calculate quantities and price for the selected side dishes.
///
/// Returns (quantities keyed by tag, total_price); only `selected` appear in either.
pub fn calculate_sides(
    adults: u32,
    children: u32,
    selected: &[SideDish],
    tables: &PriceTables,
    reduction: f64,
) -> Result<(BTreeMap<String, f64>, f64)> {
    let all = side_quantities(adults, children, reduction);

    let mut quantities = BTreeMap::new();
    let mut price = 0.0;
    for side in selected {
        let qty = all.get(side).copied().unwrap_or(0.0);
        price += qty * tables.side_price(*side)?;
        quantities.insert(side.tag().to_string(), qty);
    }

    Ok((quantities, price))
}

/// Calculate charcoal mass and price from the meat mass.
///
/// `reduction` is applied on top of `meat_kg`, which may itself be reduced already.
/// Returns (charcoal_kg, price).
pub fn calculate_charcoal(meat_kg: f64, tables: &PriceTables, reduction: f64) -> Result<(f64, f64)> {
    let charcoal_kg = (meat_kg * CHARCOAL_KG_PER_MEAT_KG) * reduction;
    let price = charcoal_kg * tables.supply_price(Supply::Charcoal)?;
    Ok((charcoal_kg, price))
}

/// Average grill minutes across the selected meats, rounded down.
pub fn preparation_minutes(meats: &[String], tables: &PriceTables) -> u32 {
    if meats.is_empty() {
        return 0;
    }
    let total: u64 = meats
        .iter()
        .map(|m| u64::from(tables.prep_minutes_for(m)))
        .sum();
    // The mean never exceeds the largest single entry, so it fits back in u32.
    (total / meats.len() as u64) as u32
}

/// Split the total among payers. Nobody paying yields 0.
pub fn cost_per_payer(total_price: f64, payers: u32) -> f64 {
    if payers == 0 {
        return 0.0;
    }
    total_price / payers as f64
}

/// Factor that scales an over-budget total down to the budget.
///
/// Returns [`NO_REDUCTION`] when there is no budget or the total fits.
pub fn budget_reduction_factor(unscaled_total: f64, budget: Option<f64>) -> f64 {
    match budget {
        Some(budget) if budget > 0.0 && unscaled_total > budget => budget / unscaled_total,
        _ => NO_REDUCTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    fn meats(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_meat_baselines() {
        assert_eq!(meat_baseline(MenuType::Standard), (0.4, 0.2));
        assert_eq!(meat_baseline(MenuType::Complete), (0.4, 0.2));
        assert_eq!(meat_baseline(MenuType::Burger), (0.2, 0.1));
        assert_eq!(meat_baseline(MenuType::GarlicBread), (0.1, 0.05));
    }

    #[test]
    fn test_meat_split_and_price() {
        let tables = PriceTables::default();
        let (kg, price) = calculate_meat(
            10,
            0,
            MenuType::Standard,
            &meats(&["picanha", "frango"]),
            &tables,
            1.0,
        );
        // 4 kg total, 2 kg each: 2*80 + 2*20
        assert_float_absolute_eq!(kg, 4.0, 1e-9);
        assert_float_absolute_eq!(price, 200.0, 1e-9);
    }

    #[test]
    fn test_unknown_meat_priced_at_default() {
        let tables = PriceTables::default();
        let (kg, price) =
            calculate_meat(5, 0, MenuType::Standard, &meats(&["cordeiro"]), &tables, 1.0);
        assert_float_absolute_eq!(kg, 2.0, 1e-9);
        assert_float_absolute_eq!(price, 2.0 * DEFAULT_MEAT_PRICE, 1e-9);
    }

    #[test]
    fn test_burger_menu_halves_meat() {
        let tables = PriceTables::default();
        let selection = meats(&["frango"]);
        let (standard, _) = calculate_meat(8, 4, MenuType::Standard, &selection, &tables, 1.0);
        let (burger, _) = calculate_meat(8, 4, MenuType::Burger, &selection, &tables, 1.0);
        assert_float_absolute_eq!(burger, standard / 2.0, 1e-9);
    }

    #[test]
    fn test_drinks_regular_and_party() {
        let tables = PriceTables::default();
        let regular = calculate_drinks(10, 5, false, &tables, 1.0).unwrap();
        assert_float_absolute_eq!(regular.beer_cans, 20.0, 1e-9);
        assert_float_absolute_eq!(regular.soda_liters, 8.5, 1e-9);
        assert_float_absolute_eq!(regular.water_liters, 6.5, 1e-9);
        // 20*3 + 8.5*5 + 6.5*2
        assert_float_absolute_eq!(regular.price, 115.5, 1e-9);

        let party = calculate_drinks(10, 5, true, &tables, 1.0).unwrap();
        assert_float_absolute_eq!(party.beer_cans, 30.0, 1e-9);
        assert_float_absolute_eq!(party.price, regular.price * 1.5, 1e-9);
    }

    #[test]
    fn test_sides_only_selected() {
        let tables = PriceTables::default();
        let (quantities, price) =
            calculate_sides(10, 5, &[SideDish::Rice, SideDish::Farofa], &tables, 1.0).unwrap();

        assert_eq!(quantities.len(), 2);
        assert_float_absolute_eq!(quantities["arroz"], 1.25, 1e-9);
        assert_float_absolute_eq!(quantities["farofa"], 1.0, 1e-9);
        assert!(!quantities.contains_key("pao_alho"));
        // 1.25*8 + 1.0*10
        assert_float_absolute_eq!(price, 20.0, 1e-9);
    }

    #[test]
    fn test_side_quantities_always_full() {
        let all = side_quantities(2, 2, 0.5);
        assert_eq!(all.len(), 4);
        // (2*1.0 + 2*0.5) * 0.5
        assert_float_absolute_eq!(all[&SideDish::GarlicBread], 1.5, 1e-9);
    }

    #[test]
    fn test_missing_side_price_fails() {
        let mut tables = PriceTables::default();
        tables.sides.remove("vinagrete");
        assert!(calculate_sides(1, 0, &[SideDish::Vinaigrette], &tables, 1.0).is_err());
        // Unselected sides never need a price
        assert!(calculate_sides(1, 0, &[SideDish::Rice], &tables, 1.0).is_ok());
    }

    #[test]
    fn test_charcoal() {
        let tables = PriceTables::default();
        let (kg, price) = calculate_charcoal(5.0, &tables, 1.0).unwrap();
        assert_float_absolute_eq!(kg, 6.0, 1e-9);
        assert_float_absolute_eq!(price, 30.0, 1e-9);

        let (reduced, _) = calculate_charcoal(5.0, &tables, 0.5).unwrap();
        assert_float_absolute_eq!(reduced, 3.0, 1e-9);
    }

    #[test]
    fn test_preparation_minutes_floor() {
        let tables = PriceTables::default();
        assert_eq!(preparation_minutes(&meats(&["picanha"]), &tables), 40);
        // (40 + 30 + 20 + 120) / 4 = 52.5
        assert_eq!(
            preparation_minutes(&meats(&["picanha", "frango", "linguica", "costela"]), &tables),
            52
        );
        // (20 + 30 default) / 2
        assert_eq!(preparation_minutes(&meats(&["linguica", "cordeiro"]), &tables), 25);
        assert_eq!(preparation_minutes(&[], &tables), 0);
    }

    #[test]
    fn test_cost_per_payer() {
        assert_float_absolute_eq!(cost_per_payer(300.0, 3), 100.0, 1e-9);
        assert_eq!(cost_per_payer(300.0, 0), 0.0);
    }

    #[test]
    fn test_budget_reduction_factor() {
        assert_eq!(budget_reduction_factor(500.0, None), NO_REDUCTION);
        assert_eq!(budget_reduction_factor(500.0, Some(600.0)), NO_REDUCTION);
        assert_eq!(budget_reduction_factor(500.0, Some(500.0)), NO_REDUCTION);
        assert_float_absolute_eq!(budget_reduction_factor(500.0, Some(100.0)), 0.2, 1e-12);
    }
}
