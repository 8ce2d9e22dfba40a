use std::time::{Duration, Instant};
use tracing::{debug, trace};
use crate::domain::ProbeError;
use crate::ports::*;

/// Resolve, connect, observe. Each step gets the full per-endpoint timeout.
pub struct ProbeCertificateUseCase<D, T, L, C>
where
    D: DnsResolver,
    T: TcpDialer,
    L: TlsHandshaker,
    C: Clock,
{
    dns: D,
    tcp: T,
    tls: L,
    clock: C,
}

impl<D, T, L, C> ProbeCertificateUseCase<D, T, L, C>
where
    D: DnsResolver,
    T: TcpDialer,
    L: TlsHandshaker,
    C: Clock,
{
    pub fn new(dns: D, tcp: T, tls: L, clock: C) -> Self {
        Self { dns, tcp, tls, clock }
    }

    async fn connect(&self, host: &str, port: u16, timeout: Duration) -> Result<TcpConnection, ProbeError> {
        let ips = self.clock.timeout(timeout, self.dns.resolve(host)).await??;
        let mut last_err = ProbeError::Other(format!("no addresses for {}", host));
        for ip in ips {
            match self.clock.timeout(timeout, self.tcp.connect(ip, port)).await.and_then(|r| r) {
                Ok(conn) => return Ok(conn),
                Err(e) => {
                    trace!(%ip, port, error = %e, "connect attempt failed");
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}

impl<D, T, L, C> CertProber for ProbeCertificateUseCase<D, T, L, C>
where
    D: DnsResolver,
    T: TcpDialer,
    L: TlsHandshaker,
    C: Clock,
{
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> Result<Vec<u8>, ProbeError> {
        let start = self.clock.now();
        let conn = self.connect(host, port, timeout).await?;
        let peer = self.clock.timeout(timeout, self.tls.observe(conn.stream, host)).await??;
        debug!(
            host,
            port,
            tcp_ms = conn.tcp_ms,
            tls_ms = peer.tls_ms,
            total_ms = elapsed_ms(start, self.clock.now()),
            version = %peer.summary.version,
            cipher = %peer.summary.cipher,
            chain_len = peer.summary.chain_len,
            "observed peer certificate"
        );
        Ok(peer.leaf_der)
    }
}

fn elapsed_ms(start: Instant, end: Instant) -> f64 {
    end.duration_since(start).as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;
    use std::sync::Mutex;
    use crate::domain::HandshakeSummary;
    use crate::infrastructure::TokioClock;

    struct StaticResolver(Vec<IpAddr>);

    impl DnsResolver for StaticResolver {
        async fn resolve(&self, _host: &str) -> Result<Vec<IpAddr>, ProbeError> {
            Ok(self.0.clone())
        }
    }

    enum Dial {
        Refuse,
        Hang,
        Accept,
    }

    struct ScriptedDialer {
        script: Vec<(IpAddr, Dial)>,
        attempts: Mutex<Vec<IpAddr>>,
    }

    impl ScriptedDialer {
        fn new(script: Vec<(IpAddr, Dial)>) -> Self {
            Self { script, attempts: Mutex::new(Vec::new()) }
        }
    }

    impl TcpDialer for ScriptedDialer {
        async fn connect(&self, ip: IpAddr, _port: u16) -> Result<TcpConnection, ProbeError> {
            self.attempts.lock().unwrap().push(ip);
            match self.script.iter().find(|(i, _)| *i == ip).map(|(_, d)| d) {
                Some(Dial::Accept) => {
                    let (client, _server) = tokio::io::duplex(64);
                    Ok(TcpConnection { stream: BoxedIoStream::new(client), tcp_ms: 0.1 })
                }
                Some(Dial::Hang) => std::future::pending::<Result<TcpConnection, ProbeError>>().await,
                _ => Err(ProbeError::ConnectionRefused),
            }
        }
    }

    struct FixedHandshaker(Option<Vec<u8>>);

    impl TlsHandshaker for FixedHandshaker {
        async fn observe(&self, _stream: BoxedIoStream, _host: &str) -> Result<PeerCertificate, ProbeError> {
            match &self.0 {
                Some(der) => Ok(PeerCertificate {
                    leaf_der: der.clone(),
                    tls_ms: 1.0,
                    summary: HandshakeSummary::new("TLS1.3".into(), "TLS13_AES_128_GCM_SHA256".into(), 1),
                }),
                None => std::future::pending::<Result<PeerCertificate, ProbeError>>().await,
            }
        }
    }

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn returns_leaf_from_handshake() {
        let prober = ProbeCertificateUseCase::new(
            StaticResolver(vec![ip("10.0.0.1")]),
            ScriptedDialer::new(vec![(ip("10.0.0.1"), Dial::Accept)]),
            FixedHandshaker(Some(vec![0x30, 0x03])),
            TokioClock::new(),
        );
        let der = prober.probe("node", 9871, Duration::from_secs(1)).await.unwrap();
        assert_eq!(der, vec![0x30, 0x03]);
    }

    #[tokio::test]
    async fn refused_connection_is_reported() {
        let prober = ProbeCertificateUseCase::new(
            StaticResolver(vec![ip("10.0.0.1")]),
            ScriptedDialer::new(vec![(ip("10.0.0.1"), Dial::Refuse)]),
            FixedHandshaker(Some(vec![])),
            TokioClock::new(),
        );
        let err = prober.probe("node", 9871, Duration::from_secs(1)).await.unwrap_err();
        assert_eq!(err, ProbeError::ConnectionRefused);
    }

    #[tokio::test]
    async fn hanging_connect_times_out() {
        let prober = ProbeCertificateUseCase::new(
            StaticResolver(vec![ip("10.0.0.1")]),
            ScriptedDialer::new(vec![(ip("10.0.0.1"), Dial::Hang)]),
            FixedHandshaker(Some(vec![])),
            TokioClock::new(),
        );
        let err = prober.probe("node", 9871, Duration::from_millis(50)).await.unwrap_err();
        assert_eq!(err, ProbeError::ConnectTimeout);
    }

    #[tokio::test]
    async fn hanging_handshake_times_out() {
        let prober = ProbeCertificateUseCase::new(
            StaticResolver(vec![ip("10.0.0.1")]),
            ScriptedDialer::new(vec![(ip("10.0.0.1"), Dial::Accept)]),
            FixedHandshaker(None),
            TokioClock::new(),
        );
        let err = prober.probe("node", 9871, Duration::from_millis(50)).await.unwrap_err();
        assert_eq!(err, ProbeError::ConnectTimeout);
    }

    #[tokio::test]
    async fn falls_through_to_next_address() {
        let dialer = ScriptedDialer::new(vec![(ip("10.0.0.1"), Dial::Refuse), (ip("10.0.0.2"), Dial::Accept)]);
        let prober = ProbeCertificateUseCase::new(
            StaticResolver(vec![ip("10.0.0.1"), ip("10.0.0.2")]),
            dialer,
            FixedHandshaker(Some(vec![1])),
            TokioClock::new(),
        );
        assert_eq!(prober.probe("node", 8090, Duration::from_secs(1)).await.unwrap(), vec![1]);
        assert_eq!(*prober.tcp.attempts.lock().unwrap(), vec![ip("10.0.0.1"), ip("10.0.0.2")]);
    }

    #[tokio::test]
    async fn empty_resolution_is_generic_failure() {
        let prober = ProbeCertificateUseCase::new(
            StaticResolver(vec![]),
            ScriptedDialer::new(vec![]),
            FixedHandshaker(Some(vec![])),
            TokioClock::new(),
        );
        let err = prober.probe("ghost", 8090, Duration::from_secs(1)).await.unwrap_err();
        assert_eq!(err, ProbeError::Other("no addresses for ghost".into()));
    }
}
