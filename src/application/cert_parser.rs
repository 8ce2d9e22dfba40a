use crate::domain::{DistinguishedName, NameAttribute, ObservedCertificate, ProbeError, ValidityWindow};
use x509_parser::der_parser::asn1_rs::{BmpString, Tag, UniversalString};
use x509_parser::prelude::*;
use chrono::{DateTime, Utc};

pub fn parse_certificate(der: &[u8]) -> Result<ObservedCertificate, ProbeError> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| ProbeError::CertificateParse(e.to_string()))?;

    let subject = extract_name(cert.subject());
    let issuer = extract_name(cert.issuer());
    let validity = ValidityWindow {
        not_before: format_asn1_time(cert.validity().not_before),
        not_after: format_asn1_time(cert.validity().not_after),
    };

    Ok(ObservedCertificate { subject, issuer, validity })
}

fn extract_name(name: &X509Name<'_>) -> DistinguishedName {
    let mut dn = DistinguishedName::new();
    for attr in NameAttribute::ALL {
        let first = match attr {
            NameAttribute::CommonName => name.iter_common_name().next(),
            NameAttribute::Organization => name.iter_organization().next(),
            NameAttribute::OrganizationalUnit => name.iter_organizational_unit().next(),
            NameAttribute::Country => name.iter_country().next(),
            NameAttribute::StateOrProvince => name.iter_state_or_province().next(),
            NameAttribute::Locality => name.iter_locality().next(),
        };
        if let Some(value) = first.and_then(attribute_text) {
            dn.insert(attr, value);
        }
    }
    dn
}

/// `as_str` only covers the single-byte string types; the wide ones are decoded here.
fn attribute_text(attr: &AttributeTypeAndValue<'_>) -> Option<String> {
    if let Ok(s) = attr.as_str() {
        return Some(s.to_string());
    }
    let any = attr.attr_value();
    match any.tag() {
        Tag::BmpString => BmpString::try_from(any).ok().map(|s| s.string()),
        Tag::UniversalString => UniversalString::try_from(any).ok().map(|s| s.string()),
        _ => None,
    }
}

fn format_asn1_time(time: ASN1Time) -> String {
    DateTime::from_timestamp(time.timestamp(), 0)
        .map(|dt: DateTime<Utc>| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
