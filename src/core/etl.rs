use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ImportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ImportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading customer rows...");
        let rows = self.pipeline.extract()?;
        tracing::info!("Read {} data rows", rows.len());

        tracing::info!("Validating and aggregating...");
        let result = self.pipeline.transform(rows)?;
        tracing::info!(
            "{} valid rows, {} invalid rows, {} unique domains",
            result.valid_rows,
            result.invalid_rows.len(),
            result.aggregate.len()
        );

        tracing::info!("Writing report...");
        let output = self.pipeline.load(result)?;
        tracing::info!("Report written to: {}", output);

        Ok(output)
    }
}
