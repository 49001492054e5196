use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// EmailJS credentials. Public by nature: they ship inside the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: "service_7425t5a".into(),
            template_id: "template_48d6rvc".into(),
            public_key: "4qenZrhHRY8VnCwrW".into(),
        }
    }
}

impl EmailConfig {
    /// Defaults, overridden by `PORTFOLIO_EMAILJS_*` variables present when
    /// the crate was compiled.
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")
                .map(Into::into)
                .unwrap_or(defaults.service_id),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")
                .map(Into::into)
                .unwrap_or(defaults.template_id),
            public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")
                .map(Into::into)
                .unwrap_or(defaults.public_key),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_id.trim().is_empty() {
            return Err(ConfigError::Blank("service_id"));
        }
        if self.template_id.trim().is_empty() {
            return Err(ConfigError::Blank("template_id"));
        }
        if self.public_key.trim().is_empty() {
            return Err(ConfigError::Blank("public_key"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub email: EmailConfig,
    pub manifest_url: String,
    pub asset_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            email: EmailConfig::default(),
            manifest_url: "Source/files.json".into(),
            asset_base: "Source".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            email: EmailConfig::from_build_env(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_are_valid() {
        assert!(EmailConfig::default().validate().is_ok());
    }

    #[test]
    fn blank_template_is_rejected() {
        let cfg = EmailConfig {
            template_id: " ".into(),
            ..EmailConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Blank("template_id")));
    }

    #[test]
    fn site_defaults_point_at_source_dir() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.manifest_url, "Source/files.json");
        assert_eq!(cfg.asset_base, "Source");
    }

    #[test]
    fn config_deserializes_from_json() {
        let cfg: SiteConfig = serde_json::from_str(
            r#"{"email":{"service_id":"s","template_id":"t","public_key":"k"},
                "manifest_url":"m.json","asset_base":"assets"}"#,
        )
        .expect("parse");
        assert_eq!(cfg.email.public_key, "k");
        assert_eq!(cfg.asset_base, "assets");
    }
}
