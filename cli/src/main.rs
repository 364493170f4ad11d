//! CLI entrypoint for unitchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unitchat_application::{
    AskAssistantUseCase, ConvertInput, ConvertLocallyUseCase, LlmGateway, NoProgress,
    ProgressNotifier,
};
use unitchat_domain::{OutputFormat, Prompt};
use unitchat_infrastructure::{ApiCredentials, ConfigError, ConfigLoader, GeminiLlmGateway};
use unitchat_presentation::{
    Cli, Command, ConsoleFormatter, ConverterRepl, OutputConfig, ProgressReporter, ReplConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting unitchat");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigError::from)?
    };
    file_config.validate().map_err(ConfigError::from)?;
    debug!("Loaded configuration: {:?}", file_config);

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(file_config.output.format)
            .unwrap_or_default(),
        color: file_config.output.color,
    };
    output.apply_color();

    let repl_config = ReplConfig {
        show_progress: file_config.repl.show_progress && !cli.quiet,
        history_file: file_config.repl.history_file.clone(),
    };

    // The credential is required before anything is shown
    let credentials = ApiCredentials::from_env()?;

    // === Dependency Injection ===
    let gateway = GeminiLlmGateway::new(credentials.into_api_key())?
        .with_api_base(&file_config.assistant.api_base);
    let gateway: Arc<dyn LlmGateway> = Arc::new(gateway);

    let converter = ConvertLocallyUseCase::default();
    let assistant = AskAssistantUseCase::new(gateway).with_behavior(file_config.behavior());

    let progress: Box<dyn ProgressNotifier> = if repl_config.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoProgress)
    };

    let succeeded = match cli.subcommand() {
        Command::Convert {
            category,
            from,
            to,
            value,
            llm,
        } => {
            let input = ConvertInput::new(category, from, to, value);
            if llm {
                convert_with_assistant(&converter, &assistant, &input, progress.as_ref(), output.format)
                    .await
            } else {
                convert_locally(&converter, &input, output.format)
            }
        }
        Command::Ask { text } => {
            let prompt = Prompt::try_new(text.join(" "))?;
            let reply = assistant
                .execute_with_progress(&prompt, progress.as_ref())
                .await;
            match output.format {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_reply(&reply)),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_reply_json(&prompt, &reply))
                }
            }
            !reply.is_error()
        }
        Command::Units { category } => list_units(&converter, category.as_deref(), output.format),
        Command::Chat => {
            let mut repl = ConverterRepl::new(converter, assistant)
                .with_progress(repl_config.show_progress)
                .with_history_file(repl_config.history_path());
            repl.run().await?;
            true
        }
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

fn convert_locally(
    converter: &ConvertLocallyUseCase,
    input: &ConvertInput,
    format: OutputFormat,
) -> bool {
    match (converter.execute(input), format) {
        (Ok(result), OutputFormat::Text) => {
            println!("{}", ConsoleFormatter::format_conversion(&result));
            true
        }
        (Ok(result), OutputFormat::Json) => {
            println!("{}", ConsoleFormatter::format_conversion_json(&result));
            true
        }
        (Err(e), OutputFormat::Text) => {
            println!("{}", ConsoleFormatter::format_conversion_error(&e));
            false
        }
        (Err(e), OutputFormat::Json) => {
            println!("{}", ConsoleFormatter::format_error_json(&e));
            false
        }
    }
}

async fn convert_with_assistant(
    converter: &ConvertLocallyUseCase,
    assistant: &AskAssistantUseCase,
    input: &ConvertInput,
    progress: &dyn ProgressNotifier,
    format: OutputFormat,
) -> bool {
    let request = match converter.request(input) {
        Ok(request) => request,
        Err(e) => {
            match format {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_conversion_error(&e)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_error_json(&e)),
            }
            return false;
        }
    };

    let reply = assistant.convert(&request, progress).await;
    match format {
        OutputFormat::Text => println!("{}", ConsoleFormatter::format_reply(&reply)),
        OutputFormat::Json => println!(
            "{}",
            ConsoleFormatter::format_assistant_conversion_json(&request, &reply)
        ),
    }
    !reply.is_error()
}

fn list_units(
    converter: &ConvertLocallyUseCase,
    category: Option<&str>,
    format: OutputFormat,
) -> bool {
    let Some(category) = category else {
        let categories = converter.categories();
        match format {
            OutputFormat::Text => print!("{}", ConsoleFormatter::format_categories(&categories)),
            OutputFormat::Json => {
                println!("{}", ConsoleFormatter::format_categories_json(&categories))
            }
        }
        return true;
    };

    match converter.units(category) {
        Ok((category, units)) => {
            let base = converter.table().base_unit(category).ok().flatten();
            match format {
                OutputFormat::Text => {
                    print!("{}", ConsoleFormatter::format_units(category, &units, base))
                }
                OutputFormat::Json => println!(
                    "{}",
                    ConsoleFormatter::format_units_json(category, &units, base)
                ),
            }
            true
        }
        Err(e) => {
            match format {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_conversion_error(&e)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_error_json(&e)),
            }
            false
        }
    }
}
