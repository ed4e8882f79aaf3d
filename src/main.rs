mod cli;

use cli::Args;
use deptree::adapters::outbound::console::StderrProgressReporter;
use deptree::adapters::outbound::filesystem::FileSystemReader;
use deptree::application::dto::{OutputFormat, ReplayRequest};
use deptree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use deptree::application::read_models::DependencyTreeReadModelBuilder;
use deptree::application::use_cases::ReplayChangesUseCase;
use deptree::config::{self, ConfigFile};
use deptree::dependency_tree::domain::RuleCatalog;
use deptree::dependency_tree::services::{RuleValidator, SubTreeProviderRegistry};
use deptree::shared::error::ExitCode;
use deptree::shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(&args);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// `RUST_LOG` wins over `-v`
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("deptree={}", args.log_directive())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Options after merging the config file under the command line
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunOptions {
    format: OutputFormat,
    filter_names: Option<Vec<String>>,
    fail_on_unresolved: bool,
    show_hidden: bool,
}

impl RunOptions {
    fn merge(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let config_format = match config {
            Some(config) => config.output_format()?,
            None => None,
        };

        let filter_names = if args.no_filters {
            Some(Vec::new())
        } else {
            config.and_then(|c| c.filters.clone())
        };

        Ok(Self {
            format: args.format.or(config_format).unwrap_or_default(),
            filter_names,
            fail_on_unresolved: args.fail_on_unresolved
                || config.and_then(|c| c.fail_on_unresolved).unwrap_or(false),
            show_hidden: args.show_hidden || config.and_then(|c| c.show_hidden).unwrap_or(false),
        })
    }
}

fn run(args: Args) -> Result<ExitCode> {
    if args.validate_rules {
        return Ok(validate_rules());
    }

    let config = load_config(&args)?;
    let options = RunOptions::merge(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let use_case = ReplayChangesUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new(),
        SubTreeProviderRegistry::with_defaults(),
    );

    let request = ReplayRequest::new(args.scenario.clone(), options.filter_names.clone());
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));

    let model = DependencyTreeReadModelBuilder::new(use_case.sub_tree_providers())
        .with_show_hidden(options.show_hidden)
        .build(&response.snapshot);
    let formatted_output = FormatterFactory::create(options.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    if options.fail_on_unresolved && model.has_visible_unresolved_dependency {
        eprintln!("❌ Visible dependencies are unresolved (--fail-on-unresolved).");
        return Ok(ExitCode::UnresolvedDependencies);
    }

    Ok(ExitCode::Success)
}

/// An explicit `--config` must exist; otherwise look next to the scenario
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path).map(Some);
    }

    let dir = match args.scenario.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    config::discover_config(dir)
}

fn validate_rules() -> ExitCode {
    let catalog = RuleCatalog::builtin();
    let violations = RuleValidator.validate(&catalog);

    if violations.is_empty() {
        eprintln!("✅ {} rule schema(s) are consistent", catalog.len());
        return ExitCode::Success;
    }

    for violation in &violations {
        eprintln!("❌ {}", violation);
    }
    eprintln!("\n{} rule violation(s) found", violations.len());
    ExitCode::ApplicationError
}
