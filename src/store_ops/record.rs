//! Certificate record construction
//!
//! Builds a [`CertificateRecord`] from DER certificate bytes, including the
//! canonical distinguished-name rendering used for root detection.

use crate::models::CertificateRecord;
use crate::utils::PemError;
use chrono::{DateTime, TimeZone, Utc};
use der_parser::oid;
use x509_parser::prelude::*;

/// Build a structured record from one DER-encoded certificate.
///
/// The root flag is computed by string equality of the canonical subject and
/// issuer renderings. This is a syntactic self-signed check only; no
/// signature is verified.
pub fn build_record(der: &[u8], index: usize) -> Result<CertificateRecord, PemError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| PemError::InvalidCertificate {
        index,
        message: format!("{:?}", e),
    })?;

    let subject = render_name(cert.subject());
    let issuer = render_name(cert.issuer());
    let is_root = subject == issuer;

    let not_before = asn1_time_to_datetime(cert.validity().not_before, index)?;
    let not_after = asn1_time_to_datetime(cert.validity().not_after, index)?;

    Ok(CertificateRecord {
        index,
        subject,
        issuer,
        not_before,
        not_after,
        is_root,
    })
}

/// Render a distinguished name in RFC 4514 style.
///
/// Attributes keep the order embedded in the certificate (no re-sorting).
/// RDNs are joined with `,`, the components of a multi-valued RDN with `+`.
pub fn render_name(name: &X509Name) -> String {
    let rdns: Vec<String> = name
        .iter()
        .map(|rdn| {
            rdn.iter()
                .map(render_attribute)
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect();

    rdns.join(",")
}

fn render_attribute(attr: &AttributeTypeAndValue) -> String {
    let attr_type = attribute_short_name(attr.attr_type())
        .map(str::to_string)
        .unwrap_or_else(|| attr.attr_type().to_id_string());

    let value = match attr.as_str() {
        Ok(s) => escape_value(s),
        // Non-string values (e.g. BMPString oddities) are rendered as
        // hex per RFC 4514 section 2.4
        Err(_) => format!("#{}", hex::encode(attr.attr_value().data)),
    };

    format!("{}={}", attr_type, value)
}

/// Short form of a DN attribute type, when one is registered
fn attribute_short_name(oid_val: &der_parser::asn1_rs::Oid) -> Option<&'static str> {
    if oid_val == &oid!(2.5.4.3) {
        Some("CN")
    } else if oid_val == &oid!(2.5.4.6) {
        Some("C")
    } else if oid_val == &oid!(2.5.4.7) {
        Some("L")
    } else if oid_val == &oid!(2.5.4.8) {
        Some("ST")
    } else if oid_val == &oid!(2.5.4.9) {
        Some("STREET")
    } else if oid_val == &oid!(2.5.4.10) {
        Some("O")
    } else if oid_val == &oid!(2.5.4.11) {
        Some("OU")
    } else if oid_val == &oid!(0.9.2342.19200300.100.1.25) {
        Some("DC")
    } else if oid_val == &oid!(0.9.2342.19200300.100.1.1) {
        Some("UID")
    } else if oid_val == &oid!(1.2.840.113549.1.9.1) {
        Some("emailAddress")
    } else {
        None
    }
}

/// Escape the characters RFC 4514 requires escaping in attribute values
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let last = value.chars().count().saturating_sub(1);

    for (i, c) in value.chars().enumerate() {
        let needs_escape = matches!(c, ',' | '+' | '"' | '\\' | '<' | '>' | ';')
            || (i == 0 && (c == ' ' || c == '#'))
            || (i == last && c == ' ');
        if needs_escape {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

fn asn1_time_to_datetime(time: ASN1Time, index: usize) -> Result<DateTime<Utc>, PemError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| PemError::InvalidCertificate {
            index,
            message: "invalid validity timestamp".to_string(),
        })
}
