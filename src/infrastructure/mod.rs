mod dns;
mod tcp;
mod tls;
mod clock;
mod renderer;

pub use dns::HickoryDnsResolver;
pub use tcp::TokioTcpDialer;
pub use tls::ObservingTlsHandshaker;
pub use clock::TokioClock;
pub use renderer::{PrettyRenderer, JsonRenderer};
