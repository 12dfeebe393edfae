use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Breakdown;
use crate::tables::PriceTables;

/// Render a breakdown as a plain-text plan.
pub fn render_plan(breakdown: &Breakdown, payers: u32, budget: Option<f64>) -> String {
    let drinks = &breakdown.drinks;
    let list = &breakdown.shopping_list;
    let mut lines: Vec<String> = vec!["=== Barbecue Plan ===".to_string(), String::new()];

    if breakdown.budget_adjusted {
        lines.push(format!(
            "Adjusted to a budget of {:.2} (quantities scaled by {:.3})",
            budget.unwrap_or(breakdown.total_price),
            breakdown.reduction_factor
        ));
        lines.push(String::new());
    }

    let sides = if breakdown.sides.is_empty() {
        "none".to_string()
    } else {
        breakdown
            .sides
            .iter()
            .map(|(k, v)| format!("{}: {:.2}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    };

    lines.push(format!(
        "Meat:     {:.2} kg ({:.2})",
        breakdown.total_meat_kg, breakdown.meat_price
    ));
    lines.push(format!(
        "Drinks:   {:.1} cans of beer, {:.1} L soda, {:.1} L water ({:.2})",
        drinks.beer_cans, drinks.soda_liters, drinks.water_liters, drinks.price
    ));
    lines.push(format!("Sides:    {} ({:.2})", sides, breakdown.sides_price));
    lines.push(format!(
        "Charcoal: {:.2} kg ({:.2})",
        breakdown.charcoal_kg, breakdown.charcoal_price
    ));
    lines.push(format!("Grill time: {} minutes", breakdown.prep_minutes));
    lines.push(format!("Total: {:.2}", breakdown.total_price));
    lines.push(format!(
        "Cost per person ({} paying): {:.2}",
        payers, breakdown.cost_per_payer
    ));

    lines.push(String::new());
    lines.push("--- Shopping List ---".to_string());
    lines.push("Meats:".to_string());
    lines.extend(list.meats.iter().map(|(meat, qty)| format!("  - {}: {}", meat, qty)));
    lines.push("Drinks:".to_string());
    lines.extend(list.drinks.iter().map(|(drink, qty)| format!("  - {}: {}", drink, qty)));
    lines.push("Sides:".to_string());
    if list.sides.is_empty() {
        lines.push("  - none selected".to_string());
    }
    lines.extend(list.sides.iter().map(|(side, qty)| format!("  - {}: {}", side, qty)));
    lines.push("Charcoal:".to_string());
    lines.push(format!("  - {}", list.charcoal));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Print a breakdown to stdout.
pub fn display_breakdown(breakdown: &Breakdown, payers: u32, budget: Option<f64>) {
    println!();
    print!("{}", render_plan(breakdown, payers, budget));
    println!();
}

/// Save the rendered plan to a text file.
pub fn save_plan<P: AsRef<Path>>(
    path: P,
    breakdown: &Breakdown,
    payers: u32,
    budget: Option<f64>,
) -> Result<()> {
    fs::write(path, render_plan(breakdown, payers, budget))?;
    Ok(())
}

/// Write the shopping list to a CSV file.
pub fn write_shopping_csv<P: AsRef<Path>>(path: P, breakdown: &Breakdown) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["category", "item", "quantity"])?;
    for (category, item, qty) in breakdown.shopping_list.rows() {
        wtr.write_record([category, item.as_str(), qty.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Display the active price tables.
pub fn display_price_tables(tables: &PriceTables) {
    println!();
    println!("=== Meats (per kg, grill minutes) ===");
    for (meat, price) in &tables.meats {
        println!(
            "  {:<12} {:>8.2}  {:>4} min",
            meat,
            price,
            tables.prep_minutes_for(meat)
        );
    }

    println!();
    println!("=== Side dishes ===");
    for (side, price) in &tables.sides {
        println!("  {:<12} {:>8.2}", side, price);
    }

    println!();
    println!("=== Drinks and charcoal ===");
    for (supply, price) in &tables.supplies {
        println!("  {:<12} {:>8.2}", supply, price);
    }
    println!();
}
