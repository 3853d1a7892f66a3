//! Account commands: register, deactivate, show

use anyhow::{bail, Context, Result};
use cardbank_atm::Machine;
use cardbank_core::{parse_expiration, Card, User};

/// Arguments for the register command
pub struct RegisterArgs {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub number: String,
    pub cvv: String,
    pub bank: String,
    pub expires: String,
    pub limit: Option<i64>,
}

/// Register a card and open its vault
pub fn register(machine: &mut Machine, args: RegisterArgs) -> Result<()> {
    let mut holder = User::new(&args.first_name, &args.last_name);
    if let Some(middle) = &args.middle_name {
        holder = holder.with_middle_name(middle);
    }

    let expiration = parse_expiration(&args.expires)
        .with_context(|| format!("Failed to parse expiration date '{}'", args.expires))?;

    let mut card = Card::new(holder, &args.number, &args.cvv, &args.bank, expiration)
        .context("Invalid card details")?;
    if let Some(limit) = args.limit {
        card.set_transaction_limit(limit);
    }

    machine
        .registry_mut()
        .register_account(card.clone())
        .context("Failed to register account")?;

    println!("✅ Account registered!");
    println!("   Card:    {}", card.number());
    println!("   Holder:  {}", card.holder().full_name());
    println!("   Bank:    {}", card.bank_name());
    println!("   Expires: {}", card.expiration().format("%d/%m/%Y"));
    println!("   Limit:   {}", card.transaction_limit());
    Ok(())
}

/// Deactivate a card and destroy its vault
pub fn deactivate(machine: &mut Machine, number: &str, cvv: &str) -> Result<()> {
    let Some(card) = machine.registry_mut().find_card(number, cvv)? else {
        bail!("No registered card matches the given number and CVV");
    };

    machine
        .registry_mut()
        .deactivate_account(&card)
        .context("Failed to deactivate account")?;

    println!("✅ Account deactivated!");
    println!("   Card: {}", card.number());
    println!("   Bank: {}", card.bank_name());
    Ok(())
}

/// Show all served banks and their registered cards
pub fn show(machine: &mut Machine) -> Result<()> {
    machine.registry_mut().reload()?;
    let registry = machine.registry();

    println!("📊 Served banks");
    for name in registry.banks_served() {
        let Some(bank) = registry.bankdata().get(name) else {
            continue;
        };
        println!();
        println!("   {} ({} cards)", bank.name(), bank.len());
        for vault in bank.vaults() {
            println!(
                "     {}  holder: {}  balance: {}",
                vault.card.number(),
                vault.holder.full_name(),
                vault.balance
            );
        }
    }
    Ok(())
}
