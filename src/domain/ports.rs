use crate::domain::model::{ImportResult, RawRow, SortMode};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn invalid_path(&self) -> &str;
    fn sort_mode(&self) -> SortMode;
}

/// One synchronous pass: read rows, validate and aggregate, write outputs.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<RawRow>>;
    fn transform(&self, rows: Vec<RawRow>) -> Result<ImportResult>;
    fn load(&self, result: ImportResult) -> Result<String>;
}
