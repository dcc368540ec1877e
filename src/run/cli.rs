use anyhow::Result;
use rust_decimal::Decimal;
use std::io::BufRead;
use std::path::Path;

use crate::allocation::{self, AllocationSnapshot, ConfirmChoice, Outcome};
use crate::catalog::Catalog;
use crate::import;
use crate::models::{BudgetPlan, FieldError, ItemDraft};
use crate::money::format_amount;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "check" => cli_check(&args[2..]),
        "summary" | "s" => cli_summary(&args[2..]),
        "catalog" => cli_catalog(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("therabudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("therabudget — budget-plan allocation checker");
    println!();
    println!("Usage: therabudget <command>");
    println!();
    println!("Commands:");
    println!("  check --funds <amt> --price <amt> --qty <n>");
    println!("    [--existing <amt>]          Already-allocated total (default: 0)");
    println!("    [--items <file.csv>]        Sum existing allocation from an item list");
    println!("                                Evaluate adding an item to a plan");
    println!("  summary --items <file.csv> --funds <amt>");
    println!("    [--plan <serial>]           Plan code to label the summary");
    println!("    [--end <YYYY-MM-DD>]        Plan end date, reports days remaining");
    println!("                                Print a plan's allocation summary");
    println!("  catalog <file.csv>            List an item catalog");
    println!("    --code <item_code>          Look up one item by exact code");
    println!("    --search <query>            Filter by code/description substring");
    println!("    --regex                     Treat --search query as a regex");
    println!("    --category <name>           Filter by category");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

pub(super) fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].clone())
}

pub(super) fn flag_amount(args: &[String], name: &str) -> Result<Option<Decimal>> {
    flag_value(args, name)
        .map(|v| import::parse_amount(&v))
        .transpose()
}

fn cli_check(args: &[String]) -> Result<()> {
    let funds = flag_amount(args, "--funds")?
        .ok_or_else(|| anyhow::anyhow!("Usage: therabudget check --funds <amt> --price <amt> --qty <n>"))?;
    if funds < Decimal::ZERO {
        anyhow::bail!("{}", FieldError::NegativeFunds);
    }

    let draft = ItemDraft {
        unit_price: flag_amount(args, "--price")?,
        quantity: match flag_value(args, "--qty") {
            Some(v) => Some(
                v.parse::<u32>()
                    .map_err(|_| anyhow::anyhow!("Invalid quantity: '{v}'"))?,
            ),
            None => None,
        },
        ..ItemDraft::default()
    };
    // Form validation gate: the policy is never evaluated on bad input
    if let Err(errors) = draft.validate() {
        let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::bail!("{}", msgs.join("; "));
    }

    let existing_total = if let Some(file) = flag_value(args, "--items") {
        let items = import::load_items(Path::new(&file), 0)?;
        allocation::total_allocated(&items)
    } else {
        flag_amount(args, "--existing")?.unwrap_or(Decimal::ZERO)
    };

    let snapshot = AllocationSnapshot::with_candidate(
        existing_total,
        draft.unit_price.unwrap_or_default(),
        draft.quantity.unwrap_or_default(),
        funds,
    );
    let decision = allocation::evaluate(&snapshot);

    match decision.outcome {
        Outcome::Blocked => {
            println!("{}", decision.message);
            println!("Item not created. Adjust the allocations and try again.");
        }
        Outcome::Confirm => {
            println!("{}", decision.message);
            let choice = prompt_confirm(&mut std::io::stdin().lock())?;
            if decision.approved(choice) {
                println!("Item approved for creation.");
            } else {
                println!("Creation cancelled. No item was created.");
            }
        }
        Outcome::Proceed => {
            println!("Budget fully allocated. Item approved for creation.");
        }
    }

    Ok(())
}

/// Read the user's answer to an under-allocation warning. Anything but an
/// explicit yes means "go back and adjust".
pub(super) fn prompt_confirm(input: &mut impl BufRead) -> Result<Option<ConfirmChoice>> {
    print!("Proceed anyway? [y/N] ");
    use std::io::Write;
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None); // EOF: treated as dismissal
    }
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(Some(ConfirmChoice::Proceed)),
        _ => Ok(Some(ConfirmChoice::Adjust)),
    }
}

fn cli_summary(args: &[String]) -> Result<()> {
    let file = flag_value(args, "--items").ok_or_else(|| {
        anyhow::anyhow!("Usage: therabudget summary --items <file.csv> --funds <amt>")
    })?;
    let funds = flag_amount(args, "--funds")?
        .ok_or_else(|| anyhow::anyhow!("Missing --funds <amt>"))?;
    if funds < Decimal::ZERO {
        anyhow::bail!("{}", FieldError::NegativeFunds);
    }

    let serial = flag_value(args, "--plan").unwrap_or_else(|| "ad-hoc".into());
    let mut plan = BudgetPlan::new(0, serial, funds);
    if let Some(end) = flag_value(args, "--end") {
        let date = chrono::NaiveDate::parse_from_str(&end, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid --end date (expected YYYY-MM-DD): {end}"))?;
        plan.end_date = Some(date);
    }

    let items = import::load_items(Path::new(&file), plan.id.unwrap_or(0))?;
    let snapshot = AllocationSnapshot::for_items(&items, plan.available_funds);

    println!("Plan {}", plan.serial);
    println!();
    for item in &items {
        println!(
            "{:<12} {:<32} {:>4} × {:>10} = {:>12}",
            item.item_code,
            item.description,
            item.quantity,
            format_amount(item.unit_price),
            format_amount(item.line_total()),
        );
    }
    println!();
    println!("Total allocated:  {}", format_amount(snapshot.total_allocated));
    println!("Available funds:  {}", format_amount(snapshot.available_funds));
    if snapshot.delta > Decimal::ZERO {
        println!("Over-allocated:   {}", format_amount(snapshot.delta));
    } else if snapshot.delta < Decimal::ZERO {
        println!("Unallocated:      {}", format_amount(snapshot.delta.abs()));
    } else {
        println!("Budget fully allocated.");
    }

    let today = chrono::Local::now().date_naive();
    if let Some(days) = plan.days_remaining(today) {
        if plan.is_expired(today) {
            println!("Plan ended {} days ago.", -days);
        } else {
            println!("Plan ends in {days} days.");
        }
    }

    Ok(())
}

fn cli_catalog(args: &[String]) -> Result<()> {
    let file = args.first().filter(|a| !a.starts_with('-')).ok_or_else(|| {
        anyhow::anyhow!("Usage: therabudget catalog <file.csv> [--search <query>]")
    })?;

    let catalog = Catalog::new(import::load_catalog(Path::new(file))?);

    let matches: Vec<_> = if let Some(code) = flag_value(args, "--code") {
        catalog
            .get(&code)
            .map(|e| vec![e])
            .ok_or_else(|| anyhow::anyhow!("No catalog item with code '{code}'"))?
    } else if let Some(query) = flag_value(args, "--search") {
        if args.iter().any(|a| a == "--regex") {
            catalog
                .search_regex(&query)
                .map_err(|e| anyhow::anyhow!("Invalid regex '{query}': {e}"))?
        } else {
            catalog.search(&query)
        }
    } else if let Some(cat) = flag_value(args, "--category") {
        catalog.in_category(&cat)
    } else {
        catalog.entries().iter().collect()
    };

    if matches.is_empty() {
        println!("No matching catalog items.");
        return Ok(());
    }
    for entry in matches {
        println!(
            "{:<12} {:<40} {:<20} {:>10}",
            entry.item_code,
            entry.description,
            entry.category.as_deref().unwrap_or("-"),
            format_amount(entry.unit_price),
        );
    }

    Ok(())
}
