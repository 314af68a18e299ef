use crate::dns::ZoneRequestHandler;
use honeyzone_domain::DomainError;
use hickory_server::ServerFuture;
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::info;

/// UDP-only listener; there is no TCP fallback.
pub struct UdpZoneServer {
    server: ServerFuture<ZoneRequestHandler>,
    local_addr: SocketAddr,
}

impl UdpZoneServer {
    pub async fn bind(addr: SocketAddr, handler: ZoneRequestHandler) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;

        let mut server = ServerFuture::new(handler);
        server.register_socket(socket);

        info!(bind_address = %local_addr, "DNS responder listening (udp)");

        Ok(Self { server, local_addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run(mut self) -> Result<(), DomainError> {
        self.server
            .block_until_done()
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}
