#![deny(missing_docs)]
//! Process bootstrap shared by the upload lambdas.
//! Every `main` calls [UploadEntrypoint::init] first so log output has the same shape across
//! handlers.

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::{ENVIRONMENT_VAR, Environment, UnknownEnvironment};

/// Selects the tracing output for the current [Environment]
#[derive(Debug)]
pub struct UploadEntrypoint {
    env: Environment,
}

impl Default for UploadEntrypoint {
    fn default() -> Self {
        UploadEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// How log events are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    /// human readable, for `cargo lambda watch`
    Pretty,
    /// one flattened json object per event, for cloudwatch
    Json,
}

impl From<Environment> for LogFormat {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => LogFormat::Pretty,
            Environment::Production | Environment::Develop => LogFormat::Json,
        }
    }
}

impl UploadEntrypoint {
    /// load `.env`, route panics through tracing and install the global subscriber.
    /// The filter always comes from `RUST_LOG`.
    pub fn init(self) {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match LogFormat::from(self.env) {
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            LogFormat::Json => {
                // lambda adds its own timestamps to the log stream
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .without_time()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(environment=%self.env, "initialized tracing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_local_logs_pretty() {
        assert_eq!(LogFormat::from(Environment::Local), LogFormat::Pretty);
        assert_eq!(LogFormat::from(Environment::Develop), LogFormat::Json);
        assert_eq!(LogFormat::from(Environment::Production), LogFormat::Json);
    }
}
