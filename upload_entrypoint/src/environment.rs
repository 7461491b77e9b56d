use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Name of the variable which selects the deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The deployment environment the lambda is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on a developer machine, e.g. through `cargo lambda watch`
    Local,
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownEnvironment(String);

impl Environment {
    /// Attempt to read the [Environment] from the `ENVIRONMENT` variable.
    /// Returns [None] if the variable is not set.
    pub fn from_env() -> Option<Result<Self, UnknownEnvironment>> {
        std::env::var(ENVIRONMENT_VAR)
            .ok()
            .map(|value| Self::from_str(&value))
    }

    /// Read the [Environment] from the environment variables, falling back to production
    /// when the variable is missing or unrecognized
    pub fn new_or_prod() -> Self {
        Self::from_env()
            .and_then(Result::ok)
            .unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(environment: &str) -> Result<Self, UnknownEnvironment> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownEnvironment(s.to_string())),
        }
    }
}
