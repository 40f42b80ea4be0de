//! CLI entrypoint for Value Cards
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use valuecards_application::{
    AccessGate, AlwaysAllow, EnhanceStatementsUseCase, ExportDocumentUseCase, LlmGateway,
    NoProgress, ProgressNotifier,
};
use valuecards_domain::{Catalog, ValuesSession};
use valuecards_infrastructure::{ConfigLoader, DocxRenderer, FileConfig, OpenAiGateway, SharedSecretGate};
use valuecards_presentation::{
    Cli, ConsoleFormatter, OutputConfig, ProgressReporter, QuestionnaireRepl, ReplConfig,
    prompt_unlock,
};

/// Install the tracing subscriber. The guard must live until exit when
/// logging to a file.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = match (cli.no_config, &cli.config) {
        (true, None) => ConfigLoader::load_defaults(),
        // --no-config with an explicit file reads that file and nothing else
        (true, Some(path)) => ConfigLoader::load_file(path)
            .map_err(|e| anyhow!("Failed to load {}: {}", path.display(), e))?,
        (false, path) => ConfigLoader::load(path.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting Value Cards");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    OutputConfig {
        color: config.output.color,
    }
    .apply();

    let catalog = Arc::new(Catalog::standard());

    if cli.list {
        println!("{}", ConsoleFormatter::format_full_catalog(&catalog));
        println!("{}", ConsoleFormatter::format_sources(catalog.sources()));
        return Ok(());
    }

    // === Dependency Injection ===
    let behavior = config.behavior_config();

    let mut gateway = OpenAiGateway::from_config(&config.enhancement);
    if let Some(limit) = behavior.timeout {
        gateway = gateway.with_timeout(limit)?;
    }
    let gateway = Arc::new(gateway);

    let gate: Arc<dyn AccessGate> = if config.access.required {
        Arc::new(SharedSecretGate::from_config(&config.access))
    } else {
        info!("Access gate disabled by configuration");
        Arc::new(AlwaysAllow)
    };

    let renderer = Arc::new(DocxRenderer::new());
    let session = ValuesSession::new(catalog)
        .with_clear_stale_enhancement(behavior.clear_stale_enhancement);

    // Scripted mode
    if cli.is_scripted() {
        return run_scripted(&cli, &config, session, gateway, gate, renderer).await;
    }

    // Interactive mode
    let mut repl = QuestionnaireRepl::new(session, gateway, gate, renderer)
        .with_behavior(behavior)
        .with_export_settings(config.export_settings())
        .with_config(ReplConfig {
            show_progress: !cli.quiet,
            ..ReplConfig::default()
        });

    repl.run().await?;
    Ok(())
}

/// Answer the questionnaire from command-line flags.
///
/// Rejected answers are reported and skipped. The export is still written
/// from whatever was valid; the run fails afterwards.
async fn run_scripted<G: LlmGateway + 'static>(
    cli: &Cli,
    config: &FileConfig,
    mut session: ValuesSession,
    gateway: Arc<G>,
    gate: Arc<dyn AccessGate>,
    renderer: Arc<DocxRenderer>,
) -> Result<()> {
    let problems = cli.apply_answers(&mut session);
    for problem in &problems {
        warn!("Rejected answer: {}", problem);
        eprintln!("{}", ConsoleFormatter::error(problem));
    }

    println!("{}", ConsoleFormatter::format_tier2(&session.tier2()));
    if let Some(choice) = session.tier_one() {
        println!(
            "{}",
            ConsoleFormatter::format_tier_one(choice, &session.support_options())
        );
    }
    if let Some(buckets) = session.buckets() {
        println!("{}", ConsoleFormatter::format_buckets(&buckets));
    }

    if cli.enhance {
        enhance(cli, config, &mut session, gateway, gate).await?;
    }

    if let Some(drafts) = session.drafts() {
        println!(
            "{}",
            ConsoleFormatter::format_statements(
                &drafts,
                session.enhanced(),
                session.is_enhancement_stale()
            )
        );
    }

    if let Some(target) = &cli.out {
        let artifact = ExportDocumentUseCase::new(renderer)
            .with_settings(config.export_settings())
            .execute(&session)?;
        let path = artifact.save(target)?;
        println!("{}", ConsoleFormatter::notice(format!("Saved {}", path.display())));
    }

    if !problems.is_empty() {
        bail!("{} answer(s) were rejected", problems.len());
    }
    Ok(())
}

/// Enhancement failures never abort the run; the drafts still get printed
/// and exported.
async fn enhance<G: LlmGateway + 'static>(
    cli: &Cli,
    config: &FileConfig,
    session: &mut ValuesSession,
    gateway: Arc<G>,
    gate: Arc<dyn AccessGate>,
) -> Result<()> {
    if session.drafts().is_none() {
        eprintln!(
            "{}",
            ConsoleFormatter::error("--enhance needs two valid --tier1 values; skipping enhancement")
        );
        return Ok(());
    }
    if !prompt_unlock(gate.as_ref())? {
        eprintln!(
            "{}",
            ConsoleFormatter::error("Enhancement is locked; keeping the draft statements")
        );
        return Ok(());
    }

    let use_case = EnhanceStatementsUseCase::new(gateway, gate)
        .with_behavior(config.behavior_config());
    let reporter = ProgressReporter::new();
    let progress: &dyn ProgressNotifier = if cli.quiet { &NoProgress } else { &reporter };

    if let Err(e) = use_case.apply(session, progress).await {
        warn!("Enhancement failed: {}", e);
        eprintln!(
            "{}",
            ConsoleFormatter::error(format!("{} (your drafts are unchanged)", e))
        );
    }
    Ok(())
}
