use std::{sync::LazyLock, time::Duration};

use serde::Deserialize;
use thiserror::Error;

use crate::content::Assets;

const SITE_FILE: &str = "site.json";

pub static GLOBAL_SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::load().unwrap_or_else(|e| {
        log::warn!("{e}, falling back to built-in site config");
        SiteConfig::default()
    })
});

pub fn site_config() -> &'static SiteConfig {
    &GLOBAL_SITE_CONFIG
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is missing")]
    Missing(&'static str),
    #[error("couldn't parse site.json: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub owner: Owner,
    pub contact: ContactConfig,
    #[serde(default)]
    pub timing: Timing,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub portrait: String,
    pub cv_path: String,
}

/// Where composed messages go and how they are addressed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactConfig {
    pub recipient: String,
    pub greeting_name: String,
    pub strategist_subject: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Delay between closing an overlay and resetting its session state.
    pub reset_delay_ms: u64,
    pub copied_ack_ms: u64,
    pub exit_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reset_delay_ms: 500,
            copied_ack_ms: 2000,
            exit_ms: 300,
        }
    }
}

impl Timing {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn copied_ack(&self) -> Duration {
        Duration::from_millis(self.copied_ack_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: Owner {
                name: "Ian Ochieng".to_string(),
                tagline: "Building practical AI products that solve real-world problems."
                    .to_string(),
                location: "Nairobi, Kenya".to_string(),
                portrait: "/images/ian-suit.jpeg".to_string(),
                cv_path: "/Ian_Ochieng_CV.pdf".to_string(),
            },
            contact: ContactConfig {
                recipient: "ianochiengai@gmail.com".to_string(),
                greeting_name: "Ian".to_string(),
                strategist_subject: "Strategist Brief".to_string(),
            },
            timing: Timing::default(),
        }
    }
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let file = Assets::get(SITE_FILE).ok_or(ConfigError::Missing(SITE_FILE))?;
        Self::from_json(&String::from_utf8_lossy(&file.data))
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_config() {
        let config = SiteConfig::load().expect("site.json should parse");
        assert_eq!(config.contact.recipient, "ianochiengai@gmail.com");
        assert_eq!(config.timing.reset_delay(), Duration::from_millis(500));
        assert_eq!(config.timing.copied_ack(), Duration::from_secs(2));
    }

    #[test]
    fn test_timing_defaults_fill_gaps() {
        let config = SiteConfig::from_json(
            r#"{
                "owner": {
                    "name": "N", "tagline": "T", "location": "L",
                    "portrait": "/p.jpeg", "cv_path": "/cv.pdf"
                },
                "contact": {
                    "recipient": "a@b.c", "greeting_name": "N",
                    "strategist_subject": "Brief"
                },
                "timing": { "copied_ack_ms": 100 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.timing.copied_ack_ms, 100);
        assert_eq!(config.timing.reset_delay_ms, 500);
    }

    #[test]
    fn test_bad_config_is_reported() {
        assert!(matches!(
            SiteConfig::from_json("{}"),
            Err(ConfigError::Parse(_))
        ));
    }
}
