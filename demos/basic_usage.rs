//! Basic authentication and account listing example.
//!
//! This example demonstrates how to authenticate with the Airwallex API
//! and retrieve account and balance information.
//!
//! Run with: cargo run --example basic_usage

use airwallex_rs::{AirwallexClient, Credentials, Environment};

#[tokio::main]
async fn main() -> airwallex_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get credentials from environment variables
    let client_id = std::env::var("AIRWALLEX_CLIENT_ID")
        .expect("AIRWALLEX_CLIENT_ID environment variable required");
    let api_key = std::env::var("AIRWALLEX_API_KEY")
        .expect("AIRWALLEX_API_KEY environment variable required");

    println!("Connecting to Airwallex demo environment...");

    let client = AirwallexClient::new(
        Credentials::new(client_id, api_key),
        Environment::Demo,
    )?;

    // Fail fast on bad credentials instead of on the first resource call.
    client.authenticate().await?;
    println!("Successfully authenticated!");

    // List all accounts
    let accounts = client.accounts().list().await?;
    println!("\nFound {} account(s):", accounts.len());

    for account in &accounts {
        println!(
            "  - {} ({})",
            account.id,
            account.account_name.as_deref().unwrap_or("No name")
        );
    }

    // Current wallet balances
    let balances = client.balances().current().await?;
    println!("\nBalances:");
    for balance in &balances {
        println!(
            "  {} {} available (pending: {:?})",
            balance.available_amount, balance.currency, balance.pending_amount
        );
    }

    println!("\nDone!");
    Ok(())
}
