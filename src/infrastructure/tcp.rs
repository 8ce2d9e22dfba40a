use std::net::{IpAddr, SocketAddr};
use std::time::Instant;
use tokio::net::TcpStream;
use crate::application::{classify_failure, ProbeStage};
use crate::domain::ProbeError;
use crate::ports::{TcpDialer, TcpConnection, BoxedIoStream};

pub struct TokioTcpDialer;

impl TokioTcpDialer {
    pub fn new() -> Self { Self }
}

impl Default for TokioTcpDialer {
    fn default() -> Self { Self::new() }
}

impl TcpDialer for TokioTcpDialer {
    async fn connect(&self, ip: IpAddr, port: u16) -> Result<TcpConnection, ProbeError> {
        let start = Instant::now();
        let stream = TcpStream::connect(SocketAddr::new(ip, port))
            .await
            .map_err(|e| classify_failure(ProbeStage::Connect, e.kind(), &e.to_string()))?;
        stream.set_nodelay(true).ok();
        Ok(TcpConnection {
            stream: BoxedIoStream::new(stream),
            tcp_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
