use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{ChurrascoError, Result};
use crate::models::{EstimateRequest, MenuType, SideDish};

const MENU_CHOICES: [MenuType; 4] = [
    MenuType::Complete,
    MenuType::Standard,
    MenuType::Burger,
    MenuType::GarlicBread,
];

/// Prompt for a guest count.
pub fn prompt_count(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| ChurrascoError::InvalidInput(format!("'{}' is not a whole number", input)))
}

/// Prompt for the menu style.
pub fn prompt_menu() -> Result<MenuType> {
    let labels = [
        "completo (every meat)",
        "padrao (pick the meats)",
        "hamburguer",
        "pao_alho",
    ];

    let selection = Select::new()
        .with_prompt("Which kind of barbecue?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MENU_CHOICES[selection])
}

/// Closest known meats for a typed name, best first.
pub fn fuzzy_meat_matches(input: &str, known_meats: &[String]) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&String, f64)> = known_meats
        .iter()
        .map(|m| (m, jaro_winkler(&m.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(m, _)| m.clone()).collect()
}

/// Prompt for meats, matching typos against the priced meats.
///
/// Names with no close match can still be kept; they are priced at the default.
pub fn prompt_meats(known_meats: &[String]) -> Result<Vec<String>> {
    let mut meats: Vec<String> = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a meat (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            if meats.is_empty() {
                println!("Pick at least one meat.");
                continue;
            }
            break;
        }

        if known_meats.contains(&input) {
            if !meats.contains(&input) {
                meats.push(input.clone());
            }
            println!("Added: {}", input);
            continue;
        }

        let candidates = fuzzy_meat_matches(&input, known_meats);
        let chosen = match candidates.len() {
            0 => {
                let keep = Confirm::new()
                    .with_prompt(format!("'{}' has no price, use the default price?", input))
                    .default(false)
                    .interact()?;
                keep.then_some(input)
            }
            1 => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", candidates[0]))
                    .default(true)
                    .interact()?;
                confirm.then(|| candidates[0].clone())
            }
            _ => {
                let mut options: Vec<String> = candidates.iter().take(5).cloned().collect();
                let shown = options.len();
                options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                (selection < shown).then(|| options[selection].clone())
            }
        };

        if let Some(meat) = chosen {
            if !meats.contains(&meat) {
                meats.push(meat.clone());
            }
            println!("Added: {}", meat);
        }
    }

    Ok(meats)
}

/// Prompt for side dishes.
pub fn prompt_sides() -> Result<Vec<String>> {
    let labels: Vec<&str> = SideDish::ALL.iter().map(|s| s.tag()).collect();

    let picked = MultiSelect::new()
        .with_prompt("Side dishes (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(picked
        .into_iter()
        .map(|i| SideDish::ALL[i].tag().to_string())
        .collect())
}

/// Prompt for an optional budget. Empty input means no budget.
pub fn prompt_budget() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Budget (press Enter for none)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .replace(',', ".")
        .parse()
        .map(Some)
        .map_err(|_| ChurrascoError::InvalidInput(format!("'{}' is not a number", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full request interactively.
pub fn collect_request(known_meats: &[String]) -> Result<EstimateRequest> {
    let adults = prompt_count("How many adults?", 10)?;
    let children = prompt_count("How many children?", 0)?;
    let menu = prompt_menu()?;

    let meats = if menu == MenuType::Complete {
        known_meats.to_vec()
    } else {
        prompt_meats(known_meats)?
    };

    let sides = prompt_sides()?;
    let party_mode = prompt_yes_no("Party mode (more drinks)?", false)?;
    let payers = prompt_count("How many people are paying?", adults)?;
    let budget = prompt_budget()?;

    Ok(EstimateRequest {
        adults: adults.into(),
        children: children.into(),
        menu: menu.tag().to_string(),
        meats,
        sides,
        party_mode,
        payers: Some(payers.into()),
        budget,
    })
}
