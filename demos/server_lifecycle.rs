use leeca_pterodactyl::{Limits, NewServer, PanelClient, PanelResult, RateLimitConfig};
use std::env;

#[tokio::main]
async fn main() -> PanelResult<()> {
    let host = env::var("PANEL_HOST").unwrap_or_else(|_| "panel.example.com".to_string());
    let token = env::var("PANEL_TOKEN").unwrap_or_else(|_| "ptla_0123456789abcdef".to_string());

    let client = PanelClient::builder()
        .host(host)
        .token(token)
        .secure(true)
        .rate_limit(RateLimitConfig {
            requests_per_second: 4,
            burst_size: 8,
        })
        .build()?;

    client.test_connection().await?;

    let node = match client.nodes().await?.into_iter().next() {
        Some(node) => node,
        None => {
            println!("Panel has no nodes");
            return Ok(());
        }
    };
    let free = client.free_allocations(node.id).await?;
    println!("Node {} has {} free allocations", node.name, free.len());

    let Some(allocation) = free.first() else {
        return Ok(());
    };

    let limits = Limits {
        memory: 1024,
        swap: -1,
        disk: 4096,
        io: 500,
        cpu: 100,
        threads: None,
    };
    let request = NewServer::new("demo-server", 1, 1, 1, allocation.id, limits)
        .description("Created by the lifecycle demo")
        .external_id("demo-server-1");

    let server = client.create_server(&request).await?;
    println!("Created server {} ({})", server.name, server.identifier);

    client.suspend_server("demo-server-1").await?;
    client.unsuspend_server("demo-server-1").await?;
    client.update_server_startup("demo-server-1", None).await?;
    client.delete_server("demo-server-1").await?;
    println!("Server {} removed", server.uuid);

    Ok(())
}
