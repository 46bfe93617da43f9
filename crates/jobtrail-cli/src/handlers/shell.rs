use crate::context::StorePaths;
use crate::types::BackendKind;
use crate::views;
use anyhow::{Context, Result};
use jobtrail_store::{Backend, Error, Ledger, RelationalStore, TabularStore};
use jobtrail_types::Field;
use std::io::{self, BufRead};

/// Interactive loop: print the summary, take one action, repeat. Any menu
/// choice other than `n`/`u`/`s` (or end of input) exits.
pub fn handle(paths: &StorePaths, backend: BackendKind) -> Result<()> {
    let backend: Box<dyn Backend> = match backend {
        BackendKind::Tabular => Box::new(TabularStore::open(&paths.tabular)),
        BackendKind::Relational => Box::new(RelationalStore::open(&paths.relational)?),
    };

    let mut ledger = Ledger::open(backend)
        .context("failed to load the store (run `jobtrail init` first?)")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        views::print_summary(&ledger.count_summary());
        println!("Enter 'n' for a new entry, 'u' to update, 's' to search, anything else to exit.");

        let Some(choice) = next_line(&mut lines)? else {
            break;
        };
        match choice.trim() {
            "n" => prompt_entry(&mut ledger, &mut lines)?,
            "u" => prompt_update(&mut ledger, &mut lines)?,
            "s" => prompt_search(&ledger, &mut lines)?,
            _ => break,
        }
    }

    Ok(())
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    Ok(lines.next().transpose()?)
}

fn prompt_entry(
    ledger: &mut Ledger,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!("Company name, optionally followed by ',quantity' (default 1):");
    let Some(input) = next_line(lines)? else {
        return Ok(());
    };

    let (company, quantity) = match parse_entry(&input) {
        Ok(parsed) => parsed,
        Err(message) => {
            println!("{}", message);
            return Ok(());
        }
    };

    match ledger.append_entry(&company, quantity) {
        Ok(()) => {
            println!("Recorded {} application(s) to {}.", quantity, company);
            Ok(())
        }
        Err(Error::InvalidQuantity(q)) => {
            println!("Quantity must be non-negative, got {}.", q);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt_update(
    ledger: &mut Ledger,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!("Update which field, 'status' or 'company'?");
    let Some(field_input) = next_line(lines)? else {
        return Ok(());
    };
    let Some(field) = parse_field(&field_input) else {
        println!("Unknown field '{}'.", field_input.trim());
        return Ok(());
    };

    println!("Company name, followed by a comma and the new value:");
    let Some(input) = next_line(lines)? else {
        return Ok(());
    };
    let Some((company, new_value)) = split_pair(&input) else {
        println!("Expected 'company,new value'.");
        return Ok(());
    };

    let touched = ledger.update_entry(&company, &new_value, field)?;
    if touched == 0 {
        println!("No rows for {}.", company);
    } else {
        println!("Updated {} row(s).", touched);
    }
    Ok(())
}

fn prompt_search(
    ledger: &Ledger,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!("Company name:");
    let Some(input) = next_line(lines)? else {
        return Ok(());
    };
    let company = input.trim();
    if company.is_empty() {
        println!("Company name cannot be empty.");
        return Ok(());
    }

    let rows = ledger.search(company);
    if rows.is_empty() {
        println!("No rows for {}.", company);
    } else {
        println!("This is what came up:");
        views::print_rows(&rows);
    }
    Ok(())
}

/// Parses `company,quantity`, or a bare `company` as the shorthand for one
/// application. Anything else malformed is reported, never reinterpreted.
fn parse_entry(input: &str) -> std::result::Result<(String, i64), String> {
    match input.split_once(',') {
        Some((company, quantity)) => {
            let company = company.trim();
            if company.is_empty() {
                return Err("Company name cannot be empty.".to_string());
            }
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Quantity must be a number, got '{}'.", quantity.trim()))?;
            Ok((company.to_string(), quantity))
        }
        None => {
            let company = input.trim();
            if company.is_empty() {
                return Err("Company name cannot be empty.".to_string());
            }
            Ok((company.to_string(), 1))
        }
    }
}

fn parse_field(input: &str) -> Option<Field> {
    match input.trim().to_lowercase().as_str() {
        "status" => Some(Field::Status),
        "company" => Some(Field::Company),
        _ => None,
    }
}

fn split_pair(input: &str) -> Option<(String, String)> {
    let (left, right) = input.split_once(',')?;
    let left = left.trim();
    let right = right.trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left.to_string(), right.to_string()))
}
