//! Walk a TAXII server: discovery, API roots, collections.
//!
//! Demonstrates lazy loading: only the entities whose fields are printed are
//! fetched.
//!
//! Run with: cargo run --example discover -- <host-or-url> [username password]

use taxii2_client::{ClientConfig, ServerDiscovery, TaxiiClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let server = args.next().unwrap_or_else(|| "example.com".to_string());
    let config = match (args.next(), args.next()) {
        (Some(username), Some(password)) => ClientConfig::with_basic_auth(username, password),
        _ => ClientConfig::default(),
    };

    let client = TaxiiClient::with_config(config)?;
    let discovery = ServerDiscovery::new(&server, &client)?;

    println!("TAXII Discovery");
    println!("===============\n");
    println!("URL:     {}", discovery.url());
    println!("Title:   {}", discovery.title()?);
    if let Some(contact) = discovery.contact()? {
        println!("Contact: {}", contact);
    }

    let default = discovery.default_api_root()?;
    for root in discovery.api_roots()? {
        let marker = match &default {
            Some(d) if std::sync::Arc::ptr_eq(d, &root) => " (default)",
            _ => "",
        };
        println!("\nAPI root {}{}", root.url(), marker);
        println!("  Title:    {}", root.title()?);
        println!("  Versions: {}", root.versions()?.join(", "));
        println!("  Max size: {} bytes", root.max_content_length()?);

        for collection in root.collections()? {
            println!(
                "  - {} [{}] read={} write={}",
                collection.title()?,
                collection.id()?,
                collection.can_read()?,
                collection.can_write()?
            );
        }
    }

    Ok(())
}
