//! REPL (Read-Eval-Print Loop) for the interactive converter

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::cli::commands::parse_value;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::warn;
use unitchat_application::{
    AskAssistantUseCase, ConvertInput, ConvertLocallyUseCase, NoProgress, ProgressNotifier,
    SendChatMessageUseCase,
};
use unitchat_domain::Transcript;

const HISTORY_CAPACITY: usize = 1000;

/// A parsed slash command
#[derive(Debug, PartialEq)]
enum ReplCommand<'a> {
    Quit,
    Help,
    Categories,
    Units(Option<&'a str>),
    Convert(Result<ConvertInput, String>),
    Llm(Result<ConvertInput, String>),
    History,
    Unknown(&'a str),
}

impl<'a> ReplCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/categories" => ReplCommand::Categories,
            "/units" => ReplCommand::Units(args.first().copied()),
            "/convert" => ReplCommand::Convert(parse_conversion_args(&args)),
            "/llm" => ReplCommand::Llm(parse_conversion_args(&args)),
            "/history" => ReplCommand::History,
            other => ReplCommand::Unknown(other),
        }
    }
}

/// `<category> <from> <to> <value>` into raw selections
fn parse_conversion_args(args: &[&str]) -> Result<ConvertInput, String> {
    match args {
        [category, from, to, value] => {
            let value = parse_value(value)?;
            Ok(ConvertInput::new(*category, *from, *to, value))
        }
        _ => Err("expected <category> <from> <to> <value>".to_string()),
    }
}

/// Interactive converter and chat session
///
/// Owns the transcript for as long as the session runs.
pub struct ConverterRepl {
    converter: ConvertLocallyUseCase,
    assistant: AskAssistantUseCase,
    chat: SendChatMessageUseCase,
    transcript: Transcript,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl ConverterRepl {
    /// Create a new ConverterRepl
    pub fn new(converter: ConvertLocallyUseCase, assistant: AskAssistantUseCase) -> Self {
        Self {
            converter,
            chat: SendChatMessageUseCase::new(assistant.clone()),
            assistant,
            transcript: Transcript::new(),
            show_progress: true,
            history_path: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist line history to `path`
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Messages exchanged so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled, cannot open {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("unitchat".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Ok(_) => {
                    println!("^C");
                    continue;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("unitchat - Unit Converter"));
        println!();
        println!("Model: {}", self.assistant.model());
        println!();
        Self::print_help();
        println!("Anything else you type is sent to the assistant as a chat message.");
        println!();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /convert <category> <from> <to> <value>  - Convert locally");
        println!("  /llm <category> <from> <to> <value>      - Ask the assistant to convert");
        println!("  /units [category]                        - List units");
        println!("  /categories                              - List categories");
        println!("  /history                                 - Show the chat transcript");
        println!("  /help, /h, /?                            - Show this help");
        println!("  /quit, /exit, /q                         - Exit");
        println!();
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Categories => {
                print!(
                    "{}",
                    ConsoleFormatter::format_categories(&self.converter.categories())
                );
            }
            ReplCommand::Units(Some(category)) => self.print_units(category),
            ReplCommand::Units(None) => {
                for category in self.converter.categories() {
                    self.print_units(category.as_str());
                }
            }
            ReplCommand::Convert(Ok(input)) => match self.converter.execute(&input) {
                Ok(result) => println!("{}", ConsoleFormatter::format_conversion(&result)),
                Err(e) => println!("{}", ConsoleFormatter::format_conversion_error(&e)),
            },
            ReplCommand::Llm(Ok(input)) => match self.converter.request(&input) {
                Ok(request) => {
                    println!("{} {}", "Asking:".dimmed(), request.to_prompt());
                    let progress = self.progress();
                    let reply = self.assistant.convert(&request, progress.as_ref()).await;
                    println!("{}", ConsoleFormatter::format_reply(&reply));
                }
                Err(e) => println!("{}", ConsoleFormatter::format_conversion_error(&e)),
            },
            ReplCommand::Convert(Err(usage)) | ReplCommand::Llm(Err(usage)) => {
                println!("{} {}", "Usage:".yellow(), usage);
            }
            ReplCommand::History => {
                println!("{}", ConsoleFormatter::format_transcript(&self.transcript));
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        println!();
        false
    }

    fn print_units(&self, category: &str) {
        match self.converter.units(category) {
            Ok((category, units)) => {
                let base = self.converter.table().base_unit(category).ok().flatten();
                print!("{}", ConsoleFormatter::format_units(category, &units, base));
            }
            Err(e) => println!("{}", ConsoleFormatter::format_conversion_error(&e)),
        }
    }

    /// Send a chat message and show the assistant's line
    async fn process_message(&mut self, line: &str) {
        let progress = self.progress();
        let sent = self
            .chat
            .execute_with_progress(&mut self.transcript, line, progress.as_ref())
            .await;

        if sent.is_some() {
            if let Some(entry) = self.transcript.last() {
                println!("{}", ConsoleFormatter::format_entry(entry));
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use unitchat_application::{GatewayError, LlmGateway};
    use unitchat_domain::{Model, Prompt};

    struct EchoGateway;

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn generate(&self, _model: &Model, prompt: &Prompt) -> Result<String, GatewayError> {
            Ok(format!("echo: {}", prompt.content()))
        }
    }

    fn repl() -> ConverterRepl {
        let assistant = AskAssistantUseCase::new(Arc::new(EchoGateway));
        ConverterRepl::new(ConvertLocallyUseCase::default(), assistant).with_progress(false)
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/categories"), ReplCommand::Categories);
        assert_eq!(ReplCommand::parse("/history"), ReplCommand::History);
        assert_eq!(ReplCommand::parse("/units"), ReplCommand::Units(None));
        assert_eq!(
            ReplCommand::parse("/units  volume"),
            ReplCommand::Units(Some("volume"))
        );
        assert_eq!(ReplCommand::parse("/nope"), ReplCommand::Unknown("/nope"));
    }

    #[test]
    fn test_parse_convert() {
        assert_eq!(
            ReplCommand::parse("/convert length mile kilometer 5"),
            ReplCommand::Convert(Ok(ConvertInput::new("length", "mile", "kilometer", 5.0)))
        );
        assert_eq!(
            ReplCommand::parse("/llm temperature celsius fahrenheit 21.5"),
            ReplCommand::Llm(Ok(ConvertInput::new(
                "temperature",
                "celsius",
                "fahrenheit",
                21.5
            )))
        );
    }

    #[test]
    fn test_parse_convert_rejects_bad_arguments() {
        assert!(matches!(
            ReplCommand::parse("/convert length mile 5"),
            ReplCommand::Convert(Err(_))
        ));
        assert!(matches!(
            ReplCommand::parse("/convert length mile kilometer -5"),
            ReplCommand::Convert(Err(_))
        ));
        assert!(matches!(
            ReplCommand::parse("/llm length mile kilometer five"),
            ReplCommand::Llm(Err(_))
        ));
    }

    #[tokio::test]
    async fn test_chat_messages_append_to_transcript() {
        let mut repl = repl();
        repl.process_message("A").await;
        repl.process_message("B").await;

        assert_eq!(
            repl.transcript().lines(),
            vec!["You: A", "Bot: echo: A", "You: B", "Bot: echo: B"]
        );
    }

    #[tokio::test]
    async fn test_commands_do_not_touch_transcript() {
        let mut repl = repl();
        assert!(!repl.handle_command("/convert length meter kilometer 1000").await);
        assert!(!repl.handle_command("/llm length meter kilometer 1000").await);
        assert!(!repl.handle_command("/units speed").await);
        assert!(repl.transcript().is_empty());
        assert!(repl.handle_command("/quit").await);
    }
}
