use anyhow::Context;
use clap::Parser;
use customer_importer::utils::{logger, validation::Validate};
use customer_importer::{CliConfig, ImportEngine, ImportPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting customer-importer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let pipeline = ImportPipeline::new(config);
    let engine = ImportEngine::new(pipeline);

    let output = engine.run().context("import failed")?;
    tracing::info!("✅ Import completed, report at: {}", output);

    Ok(())
}
