use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChurrascoError, Result};
use crate::tables::PriceTables;

/// Menu style, selecting how much meat each guest gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuType {
    /// Every priced meat is served.
    Complete,
    Burger,
    GarlicBread,
    /// Any other tag: standard portions over the chosen meats.
    Standard,
}

impl MenuType {
    /// Parse a menu tag, matched exactly. Unrecognized tags fall back to `Standard`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "completo" => MenuType::Complete,
            "hamburguer" => MenuType::Burger,
            "pao_alho" => MenuType::GarlicBread,
            _ => MenuType::Standard,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            MenuType::Complete => "completo",
            MenuType::Burger => "hamburguer",
            MenuType::GarlicBread => "pao_alho",
            MenuType::Standard => "padrao",
        }
    }
}

impl fmt::Display for MenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The side dishes the planner knows how to portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SideDish {
    Rice,
    Farofa,
    Vinaigrette,
    GarlicBread,
}

impl SideDish {
    pub const ALL: [SideDish; 4] = [
        SideDish::Rice,
        SideDish::Farofa,
        SideDish::Vinaigrette,
        SideDish::GarlicBread,
    ];

    /// Tag used in requests, price tables and output maps.
    pub fn tag(&self) -> &'static str {
        match self {
            SideDish::Rice => "arroz",
            SideDish::Farofa => "farofa",
            SideDish::Vinaigrette => "vinagrete",
            SideDish::GarlicBread => "pao_alho",
        }
    }

    /// Quantity per adult guest.
    pub fn per_adult(&self) -> f64 {
        match self {
            SideDish::Rice => 0.1,
            SideDish::Farofa => 0.08,
            SideDish::Vinaigrette => 0.05,
            SideDish::GarlicBread => 1.0,
        }
    }

    /// Quantity per child guest.
    pub fn per_child(&self) -> f64 {
        match self {
            SideDish::Rice => 0.05,
            SideDish::Farofa => 0.04,
            SideDish::Vinaigrette => 0.03,
            SideDish::GarlicBread => 0.5,
        }
    }
}

impl FromStr for SideDish {
    type Err = ChurrascoError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        SideDish::ALL
            .into_iter()
            .find(|side| side.tag() == key)
            .ok_or_else(|| ChurrascoError::UnknownSideDish(s.to_string()))
    }
}

impl fmt::Display for SideDish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Drinks and charcoal, priced from the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Supply {
    Beer,
    Soda,
    Water,
    Charcoal,
}

impl Supply {
    pub const ALL: [Supply; 4] = [Supply::Beer, Supply::Soda, Supply::Water, Supply::Charcoal];

    pub fn tag(&self) -> &'static str {
        match self {
            Supply::Beer => "cerveja",
            Supply::Soda => "refrigerante",
            Supply::Water => "agua",
            Supply::Charcoal => "carvao",
        }
    }
}

/// Meat selection used when a request does not name any.
pub fn default_meats() -> Vec<String> {
    vec!["picanha".to_string()]
}

fn default_menu() -> String {
    MenuType::Complete.tag().to_string()
}

/// Request body as it arrives on the wire.
///
/// Counts are signed so that negative values can be reported as invalid
/// input instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(rename = "adultos", default)]
    pub adults: i64,

    #[serde(rename = "criancas", default)]
    pub children: i64,

    #[serde(rename = "tipo", default = "default_menu")]
    pub menu: String,

    #[serde(rename = "carnes", default = "default_meats")]
    pub meats: Vec<String>,

    #[serde(rename = "acompanhamentos", default)]
    pub sides: Vec<String>,

    #[serde(rename = "modo_festa", default)]
    pub party_mode: bool,

    /// Defaults to the adult count.
    #[serde(rename = "pagantes", default)]
    pub payers: Option<i64>,

    #[serde(rename = "orcamento", default)]
    pub budget: Option<f64>,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            adults: 0,
            children: 0,
            menu: default_menu(),
            meats: default_meats(),
            sides: Vec::new(),
            party_mode: false,
            payers: None,
            budget: None,
        }
    }
}

impl EstimateRequest {
    /// Parse a JSON request body. Malformed bodies and non-integer counts are invalid input.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| ChurrascoError::InvalidInput(format!("malformed request: {}", e)))
    }

    /// Validate the wire request and resolve it into an [`EventRequest`].
    ///
    /// The "completo" menu replaces the meat selection with every meat in `tables`.
    pub fn into_event(self, tables: &PriceTables) -> Result<EventRequest> {
        let payers = self.payers.unwrap_or(self.adults);
        if self.adults < 0 || self.children < 0 || payers < 0 {
            log::warn!(
                "Rejected request: adults={} children={} payers={}",
                self.adults,
                self.children,
                payers
            );
            return Err(ChurrascoError::InvalidInput(
                "adult, child and payer counts must be non-negative integers".to_string(),
            ));
        }

        let menu = MenuType::from_tag(&self.menu);
        let meats = if menu == MenuType::Complete {
            tables.meat_tags()
        } else {
            dedup_tags(self.meats.iter().map(|m| m.trim().to_lowercase()))
        };

        let mut sides: Vec<SideDish> = Vec::new();
        for tag in &self.sides {
            let side: SideDish = tag.parse()?;
            if !sides.contains(&side) {
                sides.push(side);
            }
        }

        let budget = match self.budget {
            // A zero budget means "no budget".
            Some(b) if b == 0.0 => None,
            Some(b) if !b.is_finite() || b < 0.0 => {
                return Err(ChurrascoError::InvalidInput(format!(
                    "budget must be a positive number, got {}",
                    b
                )));
            }
            other => other,
        };

        Ok(EventRequest {
            adults: to_count(self.adults)?,
            children: to_count(self.children)?,
            menu,
            meats,
            sides,
            party_mode: self.party_mode,
            payers: to_count(payers)?,
            budget,
        })
    }
}

fn to_count(value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| ChurrascoError::InvalidInput(format!("count out of range: {}", value)))
}

/// Drop blank and repeated tags, keeping first occurrences in order.
fn dedup_tags(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// A validated event description, ready for estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRequest {
    pub adults: u32,
    pub children: u32,
    pub menu: MenuType,
    pub meats: Vec<String>,
    pub sides: Vec<SideDish>,
    pub party_mode: bool,
    pub payers: u32,
    pub budget: Option<f64>,
}

impl EventRequest {
    /// Checks that must hold before any category is computed.
    pub fn validate(&self) -> Result<()> {
        if self.meats.is_empty() {
            return Err(ChurrascoError::InvalidInput(
                "at least one meat must be selected".to_string(),
            ));
        }
        if let Some(b) = self.budget {
            if !b.is_finite() || b <= 0.0 {
                return Err(ChurrascoError::InvalidInput(format!(
                    "budget must be a positive number, got {}",
                    b
                )));
            }
        }
        Ok(())
    }
}
