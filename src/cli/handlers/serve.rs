//! API server handler

use crate::api::serve_api;
use crate::AppConfig;
use crate::Result;

pub async fn handle_serve_command(
    config: &AppConfig,
    host: &str,
    port: u16,
    cors: bool,
) -> Result<()> {
    println!("🚀 Starting NOC-Oracle API Server");
    println!("=================================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });
    println!();

    serve_api(config, host, port, cors).await
}
