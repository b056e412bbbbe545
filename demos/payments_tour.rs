//! Payments and pagination walkthrough.
//!
//! Lists recent payments with filters, then streams the financial
//! transaction ledger lazily, stopping after a fixed number of items.
//!
//! Run with: cargo run --example payments_tour

use airwallex_rs::api::PaymentsQuery;
use airwallex_rs::models::PaymentStatus;
use airwallex_rs::{AirwallexClient, Credentials, Environment};
use chrono::{Duration, Utc};
use futures_util::StreamExt;

#[tokio::main]
async fn main() -> airwallex_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client_id = std::env::var("AIRWALLEX_CLIENT_ID")
        .expect("AIRWALLEX_CLIENT_ID environment variable required");
    let api_key = std::env::var("AIRWALLEX_API_KEY")
        .expect("AIRWALLEX_API_KEY environment variable required");

    let client = AirwallexClient::new(
        Credentials::new(client_id, api_key),
        Environment::Demo,
    )?;

    // Paid payments from the last 30 days, all pages concatenated.
    println!("==== Paid payments, last 30 days ====");
    let query = PaymentsQuery {
        status: Some(PaymentStatus::Paid),
        from_created_at: Some(Utc::now() - Duration::days(30)),
        ..Default::default()
    };
    let payments = client.payments().list_with_filters(Some(query)).await?;
    for payment in &payments {
        println!(
            "  {} - {} {} ({:?})",
            payment.id, payment.payment_amount, payment.payment_currency, payment.status
        );
    }

    // Stream the ledger lazily; pages are fetched only as consumed.
    println!("\n==== First 10 ledger entries ====");
    let mut stream = client.transactions().list_stream(None);
    let mut count = 0;
    while let Some(result) = stream.next().await {
        let txn = result?;
        println!("  {} - {} {}", txn.id, txn.amount, txn.currency);
        count += 1;
        if count >= 10 {
            break;
        }
    }

    Ok(())
}
