use std::env::VarError;
use std::str::FromStr;

use error_stack::{Report, ResultExt};
use kernel::KernelError;
use vodca::References;

const FORMAT_KEY: &str = "BOOKLET_FORMAT";

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Json,
    Debug,
}

impl FromStr for OutputFormat {
    type Err = Report<KernelError>;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match &*value.trim().to_ascii_lowercase() {
            "json" => Ok(Self::Json),
            "debug" => Ok(Self::Debug),
            _ => Err(Report::new(KernelError::Configuration)
                .attach_printable(format!("Unknown {} value: {}", FORMAT_KEY, value))),
        }
    }
}

#[derive(Debug, Clone, References)]
pub struct Config {
    format: OutputFormat,
}

impl Config {
    /// Reads the process environment, loading `.env` first if present.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let format = match dotenvy::var(FORMAT_KEY) {
            Ok(value) => Some(value),
            Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => None,
            Err(e) => {
                return Err(e)
                    .change_context_lazy(|| KernelError::Configuration)
                    .attach_printable_lazy(|| format!("Failed to read {}", FORMAT_KEY))
            }
        };
        Self::from_value(format)
    }

    fn from_value(format: Option<String>) -> error_stack::Result<Self, KernelError> {
        let format = match format {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self { format })
    }
}
