use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use certprobe::application::{parse_duration, BuildReportUseCase, Config, Invocation, ProbeCertificateUseCase, ServiceCatalog};
use certprobe::domain::{CertprobeError, Report};
use certprobe::infrastructure::{HickoryDnsResolver, JsonRenderer, ObservingTlsHandshaker, PrettyRenderer, TokioClock, TokioTcpDialer};
use certprobe::ports::Renderer;

/// Probe cluster service ports and report which CA issued their certificates.
#[derive(Parser, Debug)]
#[command(name = "certprobe", version)]
struct Cli {
    /// Primary node address
    #[arg(long, env = "CERTPROBE_PRIMARY")]
    primary: Option<String>,

    /// Core node address ("None" means the cluster has no core nodes)
    #[arg(long, env = "CERTPROBE_CORE")]
    core: Option<String>,

    /// Substring expected in the issuer CN of trusted certificates
    #[arg(long, env = "CERTPROBE_EXPECTED_CA")]
    expected_ca: Option<String>,

    /// Invocation record as JSON ({primary_dns, core_dns, expected_ca}); "-" reads stdin
    #[arg(long)]
    event: Option<PathBuf>,

    /// Service catalog JSON replacing the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Per-endpoint timeout (e.g. 5s, 1500ms) [env: CERTPROBE_TIMEOUT]
    #[arg(long, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// Endpoints probed at once [env: CERTPROBE_CONCURRENCY]
    #[arg(short = 'c', long)]
    concurrency: Option<usize>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_timeout(v: &str) -> Result<Duration, String> {
    parse_duration(v).ok_or_else(|| format!("invalid duration '{}', expected e.g. 5s or 1500ms", v))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(r) => r,
        Err(e) => {
            let err = CertprobeError::runtime(format!("failed to create runtime: {}", e));
            eprintln!("{}", err);
            return ExitCode::from(err.class.exit_code() as u8);
        }
    };

    match rt.block_on(async_main(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.class.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "certprobe=debug" } else { "certprobe=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn async_main(cli: Cli) -> Result<(), CertprobeError> {
    let event = match &cli.event {
        Some(path) => Invocation::from_json(&read_input(path).await?)?,
        None => Invocation::default(),
    };
    let flags = Invocation { primary_dns: cli.primary, core_dns: cli.core, expected_ca: cli.expected_ca };
    let targets = event.merge(flags).into_targets();
    if targets.is_empty() {
        tracing::warn!("no primary or core host given; report will be empty");
    }

    let catalog = match &cli.catalog {
        Some(path) => ServiceCatalog::from_json(&read_input(path).await?)?,
        None => ServiceCatalog::builtin(),
    };

    let mut config = Config::from_env();
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    if let Some(concurrency) = cli.concurrency {
        config = config.with_concurrency(concurrency);
    }

    let prober = ProbeCertificateUseCase::new(HickoryDnsResolver::new()?, TokioTcpDialer::new(), ObservingTlsHandshaker::new()?, TokioClock::new());
    let report = BuildReportUseCase::new(prober, catalog, config).execute(&targets).await;

    print!("{}", render(&report, cli.json)?);
    Ok(())
}

fn render(report: &Report, json: bool) -> Result<String, CertprobeError> {
    if json {
        JsonRenderer::new().render(report)
    } else {
        PrettyRenderer::new().render(report)
    }
}

async fn read_input(path: &Path) -> Result<String, CertprobeError> {
    if path.as_os_str() == "-" {
        use tokio::io::AsyncReadExt;
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await
            .map_err(|e| CertprobeError::input(format!("failed to read stdin: {}", e)))?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(path).await
        .map_err(|e| CertprobeError::input(format!("failed to read {}: {}", path.display(), e)))
}
