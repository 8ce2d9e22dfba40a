use crate::domain::{CertprobeError, EndpointResult, OutcomeStatus, Report};
use crate::ports::Renderer;

pub struct PrettyRenderer;

impl PrettyRenderer {
    pub fn new() -> Self { Self }
}

impl Default for PrettyRenderer {
    fn default() -> Self { Self::new() }
}

impl Renderer for PrettyRenderer {
    fn render(&self, report: &Report) -> Result<String, CertprobeError> {
        let mut out = String::new();

        let expected = if report.expected_ca.is_empty() { "(any)" } else { report.expected_ca.as_str() };
        out.push_str(&format!("expected CA: {}\n", expected));

        render_role(&mut out, "PRIMARY", report.primary_node.as_deref(), &report.primary_results);
        render_role(&mut out, "CORE", report.core_node.as_deref(), &report.core_results);

        out.push('\n');
        out.push_str("SUMMARY\n");
        let counts: Vec<String> = OutcomeStatus::ALL.iter().map(|s| format!("{}={}", s.key(), report.summary.count(*s))).collect();
        out.push_str(&format!("  {}\n", counts.join("  ")));

        let findings: Vec<&EndpointResult> = report.required_findings().collect();
        if !findings.is_empty() {
            out.push_str(&format!("⚠ {} required service(s) not passing\n", findings.len()));
        }

        Ok(out)
    }
}

fn render_role(out: &mut String, title: &str, host: Option<&str>, results: &[EndpointResult]) {
    out.push('\n');
    match host {
        Some(h) => out.push_str(&format!("{} {}\n", title, h)),
        None => {
            out.push_str(&format!("{} (not probed)\n", title));
            return;
        }
    }

    for r in results {
        let marker = if r.required { "" } else { " (optional)" };
        out.push_str(&format!("  [{:<4}] {:>5}  {}{}  {}\n", r.status, r.port, r.service, marker, r.message));
        if let Some(issuer) = &r.issuer {
            out.push_str(&format!("           issuer:  {}\n", issuer.to_rfc_string()));
        }
        if let Some(subject) = &r.subject {
            out.push_str(&format!("           subject: {}\n", subject.to_rfc_string()));
        }
        if let Some(v) = &r.validity {
            out.push_str(&format!("           valid:   {} → {}\n", v.not_before, v.not_after));
        }
    }
}

pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self { Self }
}

impl Default for JsonRenderer {
    fn default() -> Self { Self::new() }
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String, CertprobeError> {
        let mut out = serde_json::to_string_pretty(report)
            .map_err(|e| CertprobeError::output(format!("failed to serialize report: {}", e)))?;
        out.push('\n');
        Ok(out)
    }
}
