use honeyzone_infrastructure::dns::{UdpZoneServer, ZoneRequestHandler};
use std::net::SocketAddr;
use tracing::{error, info};

/// Bind the UDP listener and serve until the server future ends.
///
/// A bind failure is returned to the caller, which treats it as fatal.
pub async fn start_dns_server(bind_addr: String, handler: ZoneRequestHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let server = match UdpZoneServer::bind(socket_addr, handler).await {
        Ok(server) => server,
        Err(e) => {
            error!(bind_address = %socket_addr, error = %e, "Failed to set udp listener");
            return Err(e.into());
        }
    };

    info!("DNS server ready on {}", server.local_addr());

    server.run().await?;
    Ok(())
}
