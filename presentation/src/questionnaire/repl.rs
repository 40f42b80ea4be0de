//! REPL (Read-Eval-Print Loop) for the interactive questionnaire

use super::command::{HELP, ReplCommand};
use super::unlock::read_secret;
use crate::{ConsoleFormatter, ProgressReporter, ReplConfig};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use valuecards_application::{
    AccessGate, BehaviorConfig, DocumentRenderer, EnhanceError, EnhanceStatementsUseCase,
    ExportDocumentUseCase, ExportSettings, LlmGateway, NoProgress, ProgressNotifier,
    assign_supports, choose_tier_one, toggle_value,
};
use valuecards_domain::ValuesSession;

/// What the loop does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Interactive questionnaire REPL
pub struct QuestionnaireRepl<G: LlmGateway + 'static, R: DocumentRenderer + 'static> {
    session: ValuesSession,
    gate: Arc<dyn AccessGate>,
    enhance: EnhanceStatementsUseCase<G, dyn AccessGate>,
    export: ExportDocumentUseCase<R>,
    config: ReplConfig,
}

impl<G: LlmGateway + 'static, R: DocumentRenderer + 'static> QuestionnaireRepl<G, R> {
    pub fn new(
        session: ValuesSession,
        gateway: Arc<G>,
        gate: Arc<dyn AccessGate>,
        renderer: Arc<R>,
    ) -> Self {
        Self {
            session,
            enhance: EnhanceStatementsUseCase::new(gateway, Arc::clone(&gate)),
            gate,
            export: ExportDocumentUseCase::new(renderer),
            config: ReplConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.enhance = self.enhance.with_behavior(behavior);
        self
    }

    pub fn with_export_settings(mut self, settings: ExportSettings) -> Self {
        self.export = self.export.with_settings(settings);
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &ValuesSession {
        &self.session
    }

    fn history_path(&self) -> Option<PathBuf> {
        match &self.config.history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("value-cards").join("history.txt")),
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("values> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let command = match ReplCommand::parse(line) {
                        Ok(command) => command,
                        Err(message) => {
                            println!("{}", message);
                            continue;
                        }
                    };

                    let _ = rl.add_history_entry(line);

                    match self.execute(command).await {
                        Flow::Continue(output) => println!("{}", output),
                        Flow::Quit => {
                            println!("Bye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Value Cards - Questionnaire        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} categories, {} values. Type a value to switch it on or off.",
            self.session.catalog().len(),
            self.session.catalog().value_count()
        );
        println!();
        println!("Commands:");
        println!("{}", HELP);
        println!();
    }

    /// Run one command against the session
    pub async fn execute(&mut self, command: ReplCommand) -> Flow {
        let output = match command {
            ReplCommand::Quit => return Flow::Quit,
            ReplCommand::Help => format!("\nCommands:\n{}\n", HELP),
            ReplCommand::Categories => {
                ConsoleFormatter::format_catalog(self.session.catalog(), self.session.selection())
            }
            ReplCommand::Category(position) => match self.session.catalog().category_at(position) {
                Some(category) => {
                    ConsoleFormatter::format_category(position, category, self.session.selection())
                }
                None => ConsoleFormatter::error(format!(
                    "No category {} (1-{})",
                    position,
                    self.session.catalog().len()
                )),
            },
            ReplCommand::Toggle { label, category } => {
                match toggle_value(&mut self.session, &label, category.as_deref()) {
                    Ok((entry, selected)) => ConsoleFormatter::notice(format!(
                        "{} {} ({})",
                        entry.value,
                        if selected { "selected" } else { "removed" },
                        entry.category
                    )),
                    Err(e) => ConsoleFormatter::error(e),
                }
            }
            ReplCommand::Tier2 => ConsoleFormatter::format_tier2(&self.session.tier2()),
            ReplCommand::TierOne(values) => match choose_tier_one(&mut self.session, &values) {
                Ok(choice) => {
                    ConsoleFormatter::format_tier_one(&choice, &self.session.support_options())
                }
                Err(e) => ConsoleFormatter::error(e),
            },
            ReplCommand::Support { side, values } => {
                match assign_supports(&mut self.session, side, &values) {
                    Ok(bucket) => {
                        let mut output = ConsoleFormatter::notice(format!(
                            "{} is supported by {} value(s)",
                            bucket.tier_one,
                            bucket.supports.len()
                        ));
                        let ignored = values.len().saturating_sub(bucket.supports.len());
                        if ignored > 0 {
                            output.push_str(&format!(
                                "\n{}",
                                ConsoleFormatter::notice(format!(
                                    "{} entry(ies) ignored: not an eligible Tier 2 value",
                                    ignored
                                ))
                            ));
                        }
                        output
                    }
                    Err(e) => ConsoleFormatter::error(e),
                }
            }
            ReplCommand::Buckets => match self.session.buckets() {
                Some(buckets) => ConsoleFormatter::format_buckets(&buckets),
                None => ConsoleFormatter::notice("Choose two Tier 1 values first (/tier1 a | b)"),
            },
            ReplCommand::Statements => match self.session.drafts() {
                Some(drafts) => ConsoleFormatter::format_statements(
                    &drafts,
                    self.session.enhanced(),
                    self.session.is_enhancement_stale(),
                ),
                None => ConsoleFormatter::notice("Choose two Tier 1 values first (/tier1 a | b)"),
            },
            ReplCommand::Unlock => match read_secret() {
                Ok(secret) => ConsoleFormatter::format_access(self.gate.verify(&secret)),
                Err(e) => ConsoleFormatter::error(format!("Could not read the secret: {}", e)),
            },
            ReplCommand::Enhance => self.enhance_statements().await,
            ReplCommand::Preview => {
                ConsoleFormatter::format_document(&self.session.export_document(self.title()))
            }
            ReplCommand::Export(target) => self.export_document(target.as_deref()),
            ReplCommand::Sources => ConsoleFormatter::format_sources(self.session.catalog().sources()),
        };
        Flow::Continue(output)
    }

    fn title(&self) -> &str {
        self.export.settings().title.as_str()
    }

    async fn enhance_statements(&mut self) -> String {
        let reporter = ProgressReporter::new();
        let progress: &dyn ProgressNotifier = if self.config.show_progress {
            &reporter
        } else {
            &NoProgress
        };

        match self.enhance.apply(&mut self.session, progress).await {
            Ok(enhanced) => format!(
                "{}\n  1. {}\n  2. {}",
                ConsoleFormatter::notice("Enhanced statements"),
                enhanced.first,
                enhanced.second
            ),
            Err(EnhanceError::AccessDenied) if self.gate.remaining_attempts() == 0 => {
                ConsoleFormatter::error("Enhancement is locked for this session")
            }
            Err(e) => ConsoleFormatter::error(format!("{} (your drafts are unchanged)", e)),
        }
    }

    fn export_document(&self, target: Option<&Path>) -> String {
        let result = self
            .export
            .execute(&self.session)
            .and_then(|artifact| artifact.save(target.unwrap_or(Path::new("."))));
        match result {
            Ok(path) => ConsoleFormatter::notice(format!("Saved {}", path.display())),
            Err(e) => ConsoleFormatter::error(e),
        }
    }
}
