use std::fs;
use std::io::Read;
use std::path::Path;

use clap::Parser;

use churrasco_calc_rs::cli::{Cli, Command, EstimateArgs};
use churrasco_calc_rs::error::{ChurrascoError, Result};
use churrasco_calc_rs::estimator::Estimator;
use churrasco_calc_rs::interface::{
    collect_request, display_breakdown, display_price_tables, prompt_yes_no, save_plan,
    write_shopping_csv,
};
use churrasco_calc_rs::models::{Breakdown, EstimateRequest};
use churrasco_calc_rs::tables::{load_tables, save_tables, PriceTables};

/// Exit status for requests rejected as invalid.
const EXIT_CLIENT_ERROR: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let json_errors = cli.json || matches!(command, Command::Request { .. });

    if let Err(e) = run(command, cli.prices.as_deref(), cli.json) {
        if json_errors {
            println!("{}", serde_json::json!({ "error": e.to_string() }));
        } else {
            eprintln!("Error: {}", e);
        }
        let code = if e.is_client_error() { EXIT_CLIENT_ERROR } else { 1 };
        std::process::exit(code);
    }
}

fn run(command: Command, prices: Option<&Path>, json: bool) -> Result<()> {
    let tables = match prices {
        Some(path) => load_tables(path)?,
        None => PriceTables::default(),
    };
    let estimator = Estimator::new(tables);

    match command {
        Command::Interactive => cmd_interactive(&estimator, json),
        Command::Estimate(args) => cmd_estimate(&estimator, &args, json),
        Command::Request { file } => cmd_request(&estimator, &file),
        Command::Prices { export } => cmd_prices(&estimator, export.as_deref(), json),
    }
}

/// Payers and budget as the estimator resolved them, for display.
fn display_context(request: &EstimateRequest) -> (u32, Option<f64>) {
    let payers = request.payers.unwrap_or(request.adults);
    (u32::try_from(payers).unwrap_or(0), request.budget)
}

fn print_json(breakdown: &Breakdown) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(breakdown)?);
    Ok(())
}

/// Build a plan through interactive prompts.
fn cmd_interactive(estimator: &Estimator, json: bool) -> Result<()> {
    let request = collect_request(&estimator.tables().meat_tags())?;
    let (payers, budget) = display_context(&request);
    let breakdown = estimator.estimate_request(request)?;

    if json {
        return print_json(&breakdown);
    }

    display_breakdown(&breakdown, payers, budget);

    if prompt_yes_no("Save the plan to a text file?", false)? {
        let path = "Planejamento_Churrasco.txt";
        save_plan(path, &breakdown, payers, budget)?;
        println!("Plan saved to {}.", path);
    }

    Ok(())
}

/// Estimate from command-line flags.
fn cmd_estimate(estimator: &Estimator, args: &EstimateArgs, json: bool) -> Result<()> {
    let request = args.to_request();
    let (payers, budget) = display_context(&request);
    let breakdown = estimator.estimate_request(request)?;

    if json {
        print_json(&breakdown)?;
    } else {
        display_breakdown(&breakdown, payers, budget);
    }

    if let Some(path) = &args.save {
        save_plan(path, &breakdown, payers, budget)?;
        log::info!("Plan saved to {}", path.display());
    }

    if let Some(path) = &args.csv {
        write_shopping_csv(path, &breakdown)?;
        log::info!("Shopping list written to {}", path.display());
    }

    Ok(())
}

/// Estimate from a JSON request body and print the JSON breakdown.
fn cmd_request(estimator: &Estimator, file: &Path) -> Result<()> {
    let body = if file == Path::new("-") {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        body
    } else {
        fs::read_to_string(file)?
    };

    if body.trim().is_empty() {
        return Err(ChurrascoError::InvalidInput("empty request body".to_string()));
    }

    let request = EstimateRequest::from_json(&body)?;
    let breakdown = estimator.estimate_request(request)?;
    print_json(&breakdown)
}

/// Show or export the active price tables.
fn cmd_prices(estimator: &Estimator, export: Option<&Path>, json: bool) -> Result<()> {
    let tables = estimator.tables();

    if let Some(path) = export {
        save_tables(path, tables)?;
        println!("Price tables written to {}.", path.display());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(tables)?);
    } else {
        display_price_tables(tables);
    }

    Ok(())
}
