use std::time::Duration;

pub struct Config {
    pub timeout: Duration,
    pub concurrency: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            timeout: std::env::var("CERTPROBE_TIMEOUT").ok().and_then(|v| parse_duration(&v)).unwrap_or(Duration::from_secs(5)),
            concurrency: parse_usize_env("CERTPROBE_CONCURRENCY", 4).max(1),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Accepts `5s`, `3000ms` or bare seconds.
pub fn parse_duration(v: &str) -> Option<Duration> {
    let v = v.trim();
    if let Some(s) = v.strip_suffix("ms") {
        s.parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(s) = v.strip_suffix('s') {
        s.parse::<u64>().ok().map(Duration::from_secs)
    } else {
        v.parse::<u64>().ok().map(Duration::from_secs)
    }
}

fn parse_usize_env(key: &str, default: usize) -> usize {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
