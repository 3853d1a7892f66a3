//! Transaction commands: deposit, withdraw

use anyhow::{bail, Context, Result};
use cardbank_atm::{Machine, TransactionKind};

/// Apply a deposit/withdraw transaction and persist the balance change.
pub fn transact(
    machine: &mut Machine,
    number: &str,
    cvv: &str,
    amount: i64,
    kind: TransactionKind,
) -> Result<()> {
    let Some(card) = machine.registry_mut().find_card(number, cvv)? else {
        bail!("No registered card matches the given number and CVV");
    };

    let balance = machine
        .create_transaction(&card, amount, kind)
        .with_context(|| format!("{kind} failed"))?;

    // The facade only mutates the cache; make the balance change durable.
    machine.commit().context("Failed to persist balance change")?;

    println!("✅ {} successful!", capitalize(kind.as_str()));
    println!("   Card:    {}", card.number());
    println!("   Amount:  {}", amount);
    println!("   Balance: {}", balance);
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
