use anyhow::Context;
use bundt_store::app::report::write_report;
use bundt_store::core::ConfigProvider;
use bundt_store::utils::{logger, validation::Validate};
use bundt_store::{
    BatchOutcome, BatchRunner, CliConfig, FilePipeline, LocalStorage, Menu, StoreConfig,
};
use clap::Parser;
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)，命令列參數優先
    let toml_config = match &cli.config {
        Some(path) => match StoreConfig::from_file(path) {
            Ok(mut config) => {
                config.apply_cli_overrides(&cli);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let log_level = toml_config.as_ref().and_then(|c| c.log_level());
    if cli.log_json {
        logger::init_json_logger(cli.verbose, log_level);
    } else {
        logger::init_cli_logger(cli.verbose, log_level);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let result = match toml_config {
        Some(config) => run_batch(config).await,
        None => run_batch(cli.clone()).await,
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                "❌ Order processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    };

    let stdout = std::io::stdout();
    match cli.report {
        Some(kind) => {
            let mut out = stdout.lock();
            write_report(&mut out, kind, &outcome).context("failed to write report")?;
            out.flush()?;
        }
        None => {
            let stdin = std::io::stdin();
            Menu::new(&outcome, stdin.lock(), stdout.lock())
                .run()
                .context("menu I/O failed")?;
        }
    }

    Ok(())
}

async fn run_batch<C: ConfigProvider + Validate>(config: C) -> bundt_store::Result<BatchOutcome> {
    config.validate()?;

    println!("Welcome to the {} Order System!", config.store_name());

    let storage = LocalStorage::new(config.data_dir().to_string());
    tracing::debug!("Reading input files from {}", storage.base_path());
    let export = config
        .export_path()
        .map(|path| LocalStorage::new(path.to_string()));

    let mut pipeline = FilePipeline::new(storage, config);
    if let Some(export) = export {
        pipeline = pipeline.with_export(export);
    }

    println!("Processing orders...");
    BatchRunner::new(pipeline).run().await
}
