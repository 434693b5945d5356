use crate::core::ConfigProvider;
use crate::domain::model::SortMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "customer-importer")]
#[command(about = "Counts email domains in a customer CSV export")]
pub struct CliConfig {
    /// Input customer CSV file
    #[arg(long, default_value = "customers.csv")]
    pub input: String,

    /// Report file; prints to stdout when omitted
    #[arg(long)]
    pub output: Option<String>,

    /// Invalid-row CSV file
    #[arg(long, default_value = "invalid.csv")]
    pub invalid: String,

    /// Report ordering
    #[arg(long, value_enum, default_value = "domain")]
    pub sort: SortMode,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn invalid_path(&self) -> &str {
        &self.invalid
    }

    fn sort_mode(&self) -> SortMode {
        self.sort
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("invalid", &self.invalid)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            input: "customers.csv".to_string(),
            output: None,
            invalid: "invalid.csv".to_string(),
            sort: SortMode::Domain,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let mut bad = config();
        bad.input = String::new();
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.output = Some(String::new());
        assert!(bad.validate().is_err());
    }
}
