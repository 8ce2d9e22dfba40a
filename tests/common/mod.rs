#![allow(dead_code)]

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use rcgen::{BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, KeyPair};
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_rustls::TlsAcceptor;
use certprobe::domain::ProbeError;
use certprobe::ports::DnsResolver;

/// Resolves IP literals only, so tests never touch the host resolver.
pub struct LiteralResolver;

impl DnsResolver for LiteralResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ProbeError> {
        host.parse::<IpAddr>()
            .map(|ip| vec![ip])
            .map_err(|_| ProbeError::Other(format!("not an IP literal: {}", host)))
    }
}

pub struct IssuedChain {
    pub leaf: rustls::pki_types::CertificateDer<'static>,
    pub ca: rustls::pki_types::CertificateDer<'static>,
    pub leaf_key: PrivateKeyDer<'static>,
}

/// A leaf for `localhost` signed by a CA with the given CN.
pub fn issue_chain(ca_cn: &str) -> IssuedChain {
    let ca_key = KeyPair::generate().unwrap();
    let mut ca_params = CertificateParams::new(Vec::<String>::new()).unwrap();
    ca_params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    let mut ca_dn = DistinguishedName::new();
    ca_dn.push(DnType::CommonName, ca_cn);
    ca_dn.push(DnType::OrganizationName, "Example Org");
    ca_dn.push(DnType::CountryName, "US");
    ca_params.distinguished_name = ca_dn;
    let ca = ca_params.self_signed(&ca_key).unwrap();

    let leaf_key = KeyPair::generate().unwrap();
    let mut leaf_params = CertificateParams::new(vec!["localhost".to_string()]).unwrap();
    let mut leaf_dn = DistinguishedName::new();
    leaf_dn.push(DnType::CommonName, "localhost");
    leaf_dn.push(DnType::OrganizationalUnitName, "Analytics");
    leaf_params.distinguished_name = leaf_dn;
    let leaf = leaf_params.signed_by(&leaf_key, &ca, &ca_key).unwrap();

    IssuedChain {
        leaf: leaf.der().clone(),
        ca: ca.der().clone(),
        leaf_key: PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(leaf_key.serialize_der())),
    }
}

async fn bind() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// TLS server presenting `chain` to every client.
pub async fn spawn_tls_server(chain: IssuedChain) -> SocketAddr {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(vec![chain.leaf, chain.ca], chain.leaf_key)
        .unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(config));
    let (listener, addr) = bind().await;

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                if let Ok(mut tls) = acceptor.accept(stream).await {
                    let mut buf = [0u8; 64];
                    let _ = tokio::time::timeout(Duration::from_millis(200), tls.read(&mut buf)).await;
                    let _ = tls.shutdown().await;
                }
            });
        }
    });
    addr
}

/// Reads until the client goes quiet, then hands the socket back.
async fn drain(stream: &mut TcpStream) {
    let mut buf = [0u8; 4096];
    loop {
        match tokio::time::timeout(Duration::from_millis(100), stream.read(&mut buf)).await {
            Ok(Ok(n)) if n > 0 => continue,
            _ => break,
        }
    }
}

/// Accepts, swallows the ClientHello and closes cleanly, like an RPC port
/// that does not understand TLS.
pub async fn spawn_hangup_server() -> SocketAddr {
    let (listener, addr) = bind().await;
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                drain(&mut stream).await;
                let _ = stream.shutdown().await;
            });
        }
    });
    addr
}

/// Answers a ClientHello with plaintext HTTP.
pub async fn spawn_plaintext_server() -> SocketAddr {
    let (listener, addr) = bind().await;
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                drain(&mut stream).await;
                let _ = stream.write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n").await;
                tokio::time::sleep(Duration::from_millis(500)).await;
            });
        }
    });
    addr
}

/// A port that nothing listens on.
pub async fn closed_port() -> u16 {
    let (listener, addr) = bind().await;
    drop(listener);
    addr.port()
}
