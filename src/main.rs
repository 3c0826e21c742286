use anyhow::Context;
use clap::Parser;
use storekeeper::utils::{logger, validation::Validate};
use storekeeper::{CliConfig, ContainerRepository, Controller, LocalStorage, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?,
        ),
        None => None,
    };
    let config = cli.resolve(file_config.as_ref());

    logger::init_cli_logger(config.verbose);
    tracing::debug!("Effective config: {:?}", config);

    config
        .validate()
        .context("configuration validation failed")?;

    let storage = LocalStorage::from_config(&config);
    let repository = ContainerRepository::from_config(storage, &config);
    let controller = Controller::new(repository);

    let stdin = std::io::stdin();
    let outcome = controller.run(stdin.lock(), std::io::stdout().lock());

    tracing::debug!(
        "Run finished in {:?} mode with {} stores (saved: {})",
        outcome.mode,
        outcome.container.len(),
        outcome.saved
    );

    Ok(())
}
