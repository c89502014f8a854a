use anyhow::Context;
use clap::Parser;
use switch_catalog_lint::utils::{logger, validation::Validate};
use switch_catalog_lint::{Catalog, CliConfig, LintConfig, LintRunner, Validator};

fn load_catalog(config: &CliConfig) -> anyhow::Result<Catalog> {
    let mut catalog = match &config.config {
        Some(path) => {
            let lint_config = LintConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
            lint_config
                .validate()
                .with_context(|| format!("validating {}", path.display()))?;
            lint_config.to_catalog()
        }
        None => Catalog::default(),
    };

    if config.check_switch_chips {
        catalog.check_switch_chips = true;
    }
    Ok(catalog)
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("invalid arguments: {}", e);
        eprintln!("validator: {}", e);
        std::process::exit(2);
    }

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("validator: {:#}", e);
            std::process::exit(2);
        }
    };
    tracing::debug!(
        "{} port types, {} switch chips, chip check {}",
        catalog.port_types.len(),
        catalog.switch_chips.len(),
        if catalog.check_switch_chips { "on" } else { "off" }
    );

    let runner = LintRunner::new(Validator::new(catalog));
    let stderr = std::io::stderr();
    let summary = match runner.run(&config.files, &mut stderr.lock()) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("writing report failed: {}", e);
            std::process::exit(2);
        }
    };

    std::process::exit(summary.exit_code());
}
