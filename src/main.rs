//! TaxID Worker Service Entry Point
//!
//! Loads configuration, sets up logging and metrics, and starts the HTTP server.

use taxid_worker::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
