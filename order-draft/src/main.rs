//! Inspect or edit the persisted order draft
//!
//! ```text
//! order-draft                                    show the draft
//! order-draft add <meal_id> <name> <date> <qty> <price>
//! order-draft set <meal_id> <date> <qty>
//! order-draft remove <meal_id> <date>
//! order-draft clear
//! ```

use anyhow::{Context, bail};
use chrono::NaiveDate;
use order_draft::cart::LineItem;
use order_draft::{CartManager, setup_environment};

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{value}', expected YYYY-MM-DD"))
}

fn parse_quantity(value: &str) -> anyhow::Result<i32> {
    value
        .parse()
        .with_context(|| format!("invalid quantity '{value}'"))
}

fn run_command(manager: &CartManager, args: &[String]) -> anyhow::Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        [] => {}
        ["add", meal_id, name, date, quantity, price] => {
            let price: f64 = price
                .parse()
                .with_context(|| format!("invalid price '{price}'"))?;
            manager.add_item(LineItem::new(
                *meal_id,
                *name,
                parse_date(date)?,
                parse_quantity(quantity)?,
                price,
            ))?;
        }
        ["set", meal_id, date, quantity] => {
            manager.update_quantity(meal_id, parse_date(date)?, parse_quantity(quantity)?)?;
        }
        ["remove", meal_id, date] => manager.remove_item(meal_id, parse_date(date)?)?,
        ["clear"] => manager.clear_cart(),
        other => bail!("unknown command: {}", other.join(" ")),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment().context("failed to prepare environment")?;
    tracing::info!(
        db = %config.db_path().display(),
        mode = ?config.persist_mode,
        environment = %config.environment,
        "Order draft starting"
    );

    let (manager, worker) = CartManager::from_config(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = run_command(&manager, &args);

    let snapshot = manager.snapshot();
    for item in &snapshot.items {
        println!(
            "{}  {:<24} x{:<4} @ {:>8.2}",
            item.date, item.meal_name, item.quantity, item.unit_price
        );
    }
    println!(
        "{} line(s), {} item(s), total {:.2}",
        snapshot.items.len(),
        snapshot.total_items,
        snapshot.total_price
    );

    // Closing the manager lets the worker flush the last snapshot
    drop(manager);
    if let Some(handle) = worker {
        handle.await.context("persist worker panicked")?;
    }

    result
}
