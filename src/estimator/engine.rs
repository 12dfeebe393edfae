use std::collections::BTreeMap;

use crate::error::Result;
use crate::estimator::calculations::{
    budget_reduction_factor, calculate_charcoal, calculate_drinks, calculate_meat,
    calculate_sides, cost_per_payer, preparation_minutes,
};
use crate::estimator::constants::NO_REDUCTION;
use crate::models::{Breakdown, DrinkEstimate, EstimateRequest, EventRequest, ShoppingList};
use crate::tables::PriceTables;

/// Category results for one reduction factor.
#[derive(Debug, Clone)]
struct CategoryPass {
    reduction: f64,
    meat_kg: f64,
    meat_price: f64,
    drinks: DrinkEstimate,
    sides: BTreeMap<String, f64>,
    sides_price: f64,
    charcoal_kg: f64,
    charcoal_price: f64,
}

impl CategoryPass {
    fn total_price(&self) -> f64 {
        self.meat_price + self.drinks.price + self.sides_price + self.charcoal_price
    }
}

/// Stateless barbecue estimator over a fixed set of price tables.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    tables: PriceTables,
}

impl Estimator {
    /// Tags in `tables` are lowercased to match normalized request tags.
    pub fn new(tables: PriceTables) -> Self {
        Self {
            tables: tables.normalized(),
        }
    }

    pub fn tables(&self) -> &PriceTables {
        &self.tables
    }

    /// Validate a wire request and estimate it.
    pub fn estimate_request(&self, request: EstimateRequest) -> Result<Breakdown> {
        let event = request.into_event(&self.tables)?;
        self.estimate(&event)
    }

    /// Estimate quantities and costs for an event.
    ///
    /// Runs every category once unscaled. If that total exceeds the budget, every
    /// category is run a second time with `budget / total` as the reduction factor.
    /// There is no further pass: charcoal derives from the already reduced meat mass
    /// and is reduced again, so the final total may land slightly under the budget.
    pub fn estimate(&self, request: &EventRequest) -> Result<Breakdown> {
        request.validate()?;

        let unscaled = self.run_pass(request, NO_REDUCTION)?;
        let unscaled_total = unscaled.total_price();
        log::debug!(
            "Unscaled estimate: {:.2} ({} adults, {} children, {} meats)",
            unscaled_total,
            request.adults,
            request.children,
            request.meats.len()
        );

        let reduction = budget_reduction_factor(unscaled_total, request.budget);
        let budget_adjusted = reduction < NO_REDUCTION;

        let pass = if budget_adjusted {
            log::info!(
                "Total {:.2} exceeds budget {:.2}, scaling quantities by {:.4}",
                unscaled_total,
                request.budget.unwrap_or_default(),
                reduction
            );
            self.run_pass(request, reduction)?
        } else {
            unscaled
        };

        let total_price = pass.total_price();
        let shopping_list = ShoppingList::project(
            &request.meats,
            pass.meat_kg,
            &pass.drinks,
            &pass.sides,
            pass.charcoal_kg,
        );

        Ok(Breakdown {
            total_meat_kg: pass.meat_kg,
            meat_price: pass.meat_price,
            drinks: pass.drinks,
            sides: pass.sides,
            sides_price: pass.sides_price,
            charcoal_kg: pass.charcoal_kg,
            charcoal_price: pass.charcoal_price,
            prep_minutes: preparation_minutes(&request.meats, &self.tables),
            total_price,
            shopping_list,
            cost_per_payer: cost_per_payer(total_price, request.payers),
            budget_adjusted,
            reduction_factor: pass.reduction,
        })
    }

    fn run_pass(&self, request: &EventRequest, reduction: f64) -> Result<CategoryPass> {
        let (meat_kg, meat_price) = calculate_meat(
            request.adults,
            request.children,
            request.menu,
            &request.meats,
            &self.tables,
            reduction,
        );
        let drinks = calculate_drinks(
            request.adults,
            request.children,
            request.party_mode,
            &self.tables,
            reduction,
        )?;
        let (sides, sides_price) = calculate_sides(
            request.adults,
            request.children,
            &request.sides,
            &self.tables,
            reduction,
        )?;
        let (charcoal_kg, charcoal_price) = calculate_charcoal(meat_kg, &self.tables, reduction)?;

        Ok(CategoryPass {
            reduction,
            meat_kg,
            meat_price,
            drinks,
            sides,
            sides_price,
            charcoal_kg,
            charcoal_price,
        })
    }
}
