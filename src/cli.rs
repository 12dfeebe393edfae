use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::request::default_meats;
use crate::models::EstimateRequest;

/// Churrasco — estimate meat, drinks, sides and charcoal for a barbecue, within a budget.
#[derive(Parser, Debug)]
#[command(name = "churrasco")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a price table JSON file (built-in prices when omitted).
    #[arg(short, long, global = true)]
    pub prices: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a few questions and get a plan.
    Interactive,

    /// Estimate a barbecue from command-line flags.
    Estimate(EstimateArgs),

    /// Estimate from a JSON request body (file path or '-' for stdin).
    Request {
        /// Request file.
        #[arg(default_value = "-")]
        file: PathBuf,
    },

    /// Show the active price tables.
    Prices {
        /// Write the tables to this JSON file.
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Number of adults.
    #[arg(short, long, default_value = "0")]
    pub adults: u32,

    /// Number of children.
    #[arg(short, long, default_value = "0")]
    pub children: u32,

    /// Menu type: completo, hamburguer, pao_alho, or anything else for standard portions.
    #[arg(short, long, default_value = "completo")]
    pub menu: String,

    /// Meat to serve (repeatable). Ignored for the "completo" menu.
    #[arg(long = "meat")]
    pub meats: Vec<String>,

    /// Side dish to serve (repeatable): arroz, farofa, vinagrete, pao_alho.
    #[arg(long = "side")]
    pub sides: Vec<String>,

    /// Party mode: 50% more drinks.
    #[arg(long)]
    pub party: bool,

    /// People splitting the bill (defaults to the number of adults).
    #[arg(long)]
    pub payers: Option<u32>,

    /// Maximum total spend.
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Save the rendered plan to a text file.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Write the shopping list to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl EstimateArgs {
    /// Build the wire request these flags describe.
    pub fn to_request(&self) -> EstimateRequest {
        EstimateRequest {
            adults: self.adults.into(),
            children: self.children.into(),
            menu: self.menu.clone(),
            meats: if self.meats.is_empty() {
                default_meats()
            } else {
                self.meats.clone()
            },
            sides: self.sides.clone(),
            party_mode: self.party,
            payers: self.payers.map(Into::into),
            budget: self.budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estimate_flags() {
        let cli = Cli::try_parse_from([
            "churrasco", "estimate", "-a", "10", "-c", "5", "--menu", "padrao", "--meat",
            "frango", "--meat", "costela", "--side", "arroz", "--party", "--budget", "300",
        ])
        .unwrap();

        let Some(Command::Estimate(args)) = cli.command else {
            panic!("expected estimate command");
        };
        let request = args.to_request();
        assert_eq!(request.adults, 10);
        assert_eq!(request.children, 5);
        assert_eq!(request.meats, vec!["frango".to_string(), "costela".to_string()]);
        assert_eq!(request.sides, vec!["arroz".to_string()]);
        assert!(request.party_mode);
        assert_eq!(request.payers, None);
        assert_eq!(request.budget, Some(300.0));
    }

    #[test]
    fn test_default_meat_when_none_given() {
        let cli = Cli::try_parse_from(["churrasco", "estimate", "--menu", "padrao"]).unwrap();
        let Some(Command::Estimate(args)) = cli.command else {
            panic!("expected estimate command");
        };
        assert_eq!(args.to_request().meats, default_meats());
    }

    #[test]
    fn test_negative_adults_rejected_by_parser() {
        assert!(Cli::try_parse_from(["churrasco", "estimate", "-a", "-3"]).is_err());
    }

    #[test]
    fn test_no_subcommand_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["churrasco"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Interactive));
    }
}
