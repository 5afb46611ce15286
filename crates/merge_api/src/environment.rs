//! Deployment environments and their base URLs.

use serde::{Deserialize, Serialize};

/// Base URL of the production environment.
pub const PRODUCTION_URL: &str = "https://api.merge.dev/api";

/// Base URL of the sandbox environment.
pub const SANDBOX_URL: &str = "https://api-sandbox.merge.dev/api";

/// Base URL of the EU production environment.
pub const PRODUCTION_EU_URL: &str = "https://api-eu.merge.dev/api";

/// API deployment to talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
    #[serde(alias = "eu")]
    ProductionEu,
}

impl Environment {
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
            Environment::ProductionEu => PRODUCTION_EU_URL,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::ProductionEu => write!(f, "production_eu"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            "production_eu" | "eu" => Ok(Environment::ProductionEu),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urls() {
        assert_eq!(Environment::default().base_url(), "https://api.merge.dev/api");
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://api-sandbox.merge.dev/api"
        );
        assert_eq!(
            Environment::ProductionEu.base_url(),
            "https://api-eu.merge.dev/api"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!("SANDBOX".parse(), Ok(Environment::Sandbox));
        assert_eq!("production-eu".parse(), Ok(Environment::ProductionEu));
        assert_eq!("eu".parse(), Ok(Environment::ProductionEu));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for env in [
            Environment::Production,
            Environment::Sandbox,
            Environment::ProductionEu,
        ] {
            assert_eq!(env.to_string().parse(), Ok(env));
        }
    }

    #[test]
    fn test_serde_names() {
        let env: Environment = serde_json::from_str(r#""production_eu""#).unwrap();
        assert_eq!(env, Environment::ProductionEu);
        let env: Environment = serde_json::from_str(r#""eu""#).unwrap();
        assert_eq!(env, Environment::ProductionEu);
        assert_eq!(
            serde_json::to_string(&Environment::Sandbox).unwrap(),
            r#""sandbox""#
        );
    }
}
