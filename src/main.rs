use clap::Parser;
use rte_gen::config::toml_config::TomlConfig;
use rte_gen::utils::{logger, validation::Validate};
use rte_gen::{CliConfig, LocalStorage, RteEngine, RteGenError, RtePipeline};

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting rte-gen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), RteGenError> {
    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading settings from: {}", path.display());
            let settings = TomlConfig::from_file(path)?;
            settings.validate()?;
            Some(settings)
        }
        None => None,
    };

    let config = cli.resolve(settings.as_ref())?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    let input = config.input.display().to_string();
    let output = config.output.display().to_string();

    let pipeline = RtePipeline::new(LocalStorage::new(), config);
    let engine = RteEngine::new_with_dry_run(pipeline, cli.dry_run);
    let report = engine.run()?;

    if report.rendered.is_none() {
        tracing::info!("✅ Generated component {}", report.component);
    }
    report.write_to(&input, &output, &mut std::io::stdout().lock())?;
    Ok(())
}
