use std::env;
use std::io::{self, Write};

use anyhow::Result;

use expenselog::{Expense, ExpenseReport, ExpenseStore};

const DEFAULT_STORE: &str = "expenses.csv";

fn main() -> Result<()> {
    // Keep logging on stderr and quiet by default; RUST_LOG overrides.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?.start()?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE.to_string());
    let store = ExpenseStore::new(path);

    loop {
        println!();
        println!("💰 Expense Tracker ({})", store.path().display());
        println!("1. Add an expense");
        println!("2. View monthly expenses");
        println!("3. View expenses by category");
        println!("4. Exit");

        let choice = match prompt("Enter your choice: ") {
            Ok(choice) => choice,
            Err(_) => break, // stdin closed
        };

        let outcome = match choice.as_str() {
            "1" => add_expense(&store),
            "2" => view_monthly(&store),
            "3" => view_by_category(&store),
            "4" => break,
            _ => {
                println!("Invalid choice! Please try again.");
                continue;
            }
        };

        // One failed operation never ends the session
        if let Err(err) = outcome {
            println!("❌ {err:#}");
        }
    }

    Ok(())
}

fn add_expense(store: &ExpenseStore) -> Result<()> {
    let date = prompt("Enter the date (YYYY-MM-DD): ")?;
    let category = prompt("Enter the category (e.g., food, transportation, entertainment): ")?;
    let amount = prompt("Enter the amount: ")?;
    let description = prompt("Enter a brief description: ")?;

    let expense = Expense::from_input(&date, &category, &amount, &description)?;
    store.append(&expense)?;

    println!("✓ Expense added successfully!");
    Ok(())
}

fn view_monthly(store: &ExpenseStore) -> Result<()> {
    let month = prompt("Enter the month (YYYY-MM): ")?;

    let report = store.month_expenses(&month)?;
    render(&report);
    println!("Total expenses for {month}: {}", report.total);
    Ok(())
}

fn view_by_category(store: &ExpenseStore) -> Result<()> {
    let category = prompt("Enter the category: ")?;

    let report = store.category_expenses(&category)?;
    render(&report);
    println!("Total expenses for category '{category}': {}", report.total);
    Ok(())
}

fn render(report: &ExpenseReport) {
    for expense in &report.matches {
        println!("{expense}");
    }
}

/// Read one trimmed line from stdin, erroring once the stream closes.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}
