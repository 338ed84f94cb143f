//! Basic NWS client usage example

use nws_client::{AlertQuery, NwsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = NwsClient::new();

    // Active alerts for one state
    println!("=== Kansas alerts ===");
    let query = AlertQuery {
        active: Some(true),
        status: vec!["actual".to_string()],
        area: vec!["KS".to_string()],
        limit: Some(5),
        ..Default::default()
    };

    let alerts = client.get_alerts(&query).await?;
    for alert in &alerts {
        println!(
            "{}: {}",
            alert.event.as_deref().unwrap_or("(unknown event)"),
            alert.headline.as_deref().unwrap_or("(no headline)")
        );
    }

    // Glossary
    println!("\n=== Glossary ===");
    let glossary = client.get_glossary().await?;
    println!("Fetched {} glossary entries", glossary.len());
    for entry in glossary.iter().take(3) {
        println!(
            "{}: {}",
            entry.term.as_deref().unwrap_or("(no term)"),
            entry.definition.as_deref().unwrap_or("(no definition)")
        );
    }

    Ok(())
}
