mod dns;
mod tcp;
mod tls;
mod clock;
mod prober;
mod renderer;
mod io;

pub use dns::DnsResolver;
pub use tcp::{TcpDialer, TcpConnection};
pub use tls::{TlsHandshaker, PeerCertificate};
pub use clock::Clock;
pub use prober::CertProber;
pub use renderer::Renderer;
pub use io::{IoStream, BoxedIoStream};
