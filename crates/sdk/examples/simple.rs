//! Simple SDK Example
//!
//! Demonstrates basic usage of the Healthz SDK.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package healthz-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package healthz-sdk --example simple
//!    ```

use healthz_sdk::HealthzClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Healthz SDK - Simple Example");
    println!("============================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = HealthzClient::connect("http://127.0.0.1:9527").await?;
    println!("   ✓ Connected\n");

    // 2. Register a website
    println!("2. Registering a website...");
    let website = client.register("https://www.rust-lang.org").await?;
    println!("   ✓ Registered:");
    println!("     - ID: {}", website.id);
    println!("     - URL: {}", website.url);
    println!("     - Healthy: {}\n", website.healthy);

    // 3. A malformed URL is rejected
    println!("3. Registering a relative URL...");
    match client.register("example.com").await {
        Err(e) if e.is_invalid_url() => println!("   ✓ Rejected: {}\n", e),
        Err(e) => return Err(e.into()),
        Ok(w) => println!("   ⚠ Unexpectedly accepted as {}\n", w.id),
    }

    // 4. List everything
    println!("4. Listing websites...");
    for w in client.list().await? {
        println!("     - {} {} healthy={}", w.id, w.url, w.healthy);
    }
    println!();

    // 5. Stats
    let stats = client.stats().await?;
    println!(
        "5. Stats: {} total, {} healthy, sweeper {}\n",
        stats.total_targets, stats.healthy_targets, stats.sweeper_state
    );

    // 6. Remove it again
    println!("6. Removing website...");
    let response = client.remove(&website.id).await?;
    if response.deleted {
        println!("   ✓ Removed");
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
