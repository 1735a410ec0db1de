//! Site Configuration
//!
//! Defaults match the published site. A deployment can override any
//! subset of fields with a JSON document; missing fields keep defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Postal and electronic contact details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub address_lines: Vec<String>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub office_hours: Vec<String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            address_lines: vec![
                "Dumun Village, Tabare LLG".into(),
                "Dumaun Junction PO Box 129".into(),
                "Kundiawa, Simbu Province".into(),
                "Papua New Guinea".into(),
            ],
            phones: vec!["+675 7182 9634".into(), "+675 8262 9813".into()],
            emails: vec!["maurookrupa41@gmail.com".into(), "karlkama37@gmail.com".into()],
            office_hours: vec![
                "Monday - Friday: 8:00 AM - 5:00 PM".into(),
                "Saturday: 9:00 AM - 1:00 PM".into(),
                "Sunday: Closed".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub organization: String,
    pub tagline: String,
    pub logo_url: String,
    pub contact: ContactInfo,
    /// Simulated form submission latency
    pub submit_latency_ms: u32,
    /// How long a success notice stays up before clearing itself
    pub notice_duration_ms: u32,
    /// Council wards covered by the protected area
    pub coverage_wards: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            organization: "Kakondo Protected Area Management Inc.".into(),
            tagline: "Preserving nature while empowering communities through sustainable conservation practices.".into(),
            logo_url: "https://pub-cdn.sider.ai/u/U01AH8X8EKX/web-coder/6863bb0f235f86442e3a1440/resource/469ffeb5-f37f-46b2-8181-0ec4ed286287.png".into(),
            contact: ContactInfo::default(),
            submit_latency_ms: 2000,
            notice_duration_ms: 6000,
            coverage_wards: 8,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Primary phone and email for the footer
    pub fn primary_phone(&self) -> Option<&str> {
        self.contact.phones.first().map(String::as_str)
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.contact.emails.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.submit_latency_ms, 2000);
        assert_eq!(config.coverage_wards, 8);
        assert_eq!(config.primary_phone(), Some("+675 7182 9634"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"submit_latency_ms": 10, "contact": {"phones": ["+675 1"]}}"#).unwrap();
        assert_eq!(config.submit_latency_ms, 10);
        assert_eq!(config.primary_phone(), Some("+675 1"));
        assert_eq!(config.contact.emails, ContactInfo::default().emails);
        assert_eq!(config.organization, SiteConfig::default().organization);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid site config"));
        assert!(SiteConfig::from_json(r#"{"submit_latency_ms": "slow"}"#).is_err());
    }
}
