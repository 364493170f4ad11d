//! Console output formatter for conversions, replies and listings

use colored::Colorize;
use serde_json::json;
use unitchat_domain::{
    AssistantReply, Category, ConversionRequest, ConversionResult, DomainError, Prompt, Speaker,
    Transcript, TranscriptEntry, format_value,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `Converted Value: {result} {to_unit}`
    pub fn format_conversion(result: &ConversionResult) -> String {
        format!(
            "{} {} {}",
            "Converted Value:".green().bold(),
            format_value(result.value),
            result.unit()
        )
    }

    /// `Conversion error: {details}`
    pub fn format_conversion_error(error: &DomainError) -> String {
        format!("{} {}", "Conversion error:".red().bold(), error)
    }

    /// Assistant reply as shown to the user; failures read `Error: {details}`
    pub fn format_reply(reply: &AssistantReply) -> String {
        match reply {
            AssistantReply::Answer(text) => text.clone(),
            AssistantReply::Failed(_) => reply.display_text().red().to_string(),
        }
    }

    /// One transcript line, `You: …` or `Bot: …`
    pub fn format_entry(entry: &TranscriptEntry) -> String {
        let label = format!("{}:", entry.speaker.label());
        let label = match entry.speaker {
            Speaker::You => label.cyan().bold(),
            Speaker::Bot => label.yellow().bold(),
        };
        format!("{} {}", label, entry.text)
    }

    /// The whole transcript, oldest entry first
    pub fn format_transcript(transcript: &Transcript) -> String {
        if transcript.is_empty() {
            return "(no messages yet)".dimmed().to_string();
        }
        transcript
            .entries()
            .iter()
            .map(Self::format_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All categories, one per line
    pub fn format_categories(categories: &[Category]) -> String {
        let mut output = format!("{}\n", "Categories:".cyan().bold());
        for category in categories {
            output.push_str(&format!("  {}\n", category));
        }
        output
    }

    /// Units of one category in table order, the base unit marked
    pub fn format_units(category: Category, units: &[&str], base: Option<&str>) -> String {
        let mut output = format!("{}\n", format!("{} units:", category).cyan().bold());
        for unit in units {
            if Some(*unit) == base {
                output.push_str(&format!("  {} {}\n", unit, "(base)".dimmed()));
            } else {
                output.push_str(&format!("  {}\n", unit));
            }
        }
        output
    }

    /// Format a local conversion as JSON
    pub fn format_conversion_json(result: &ConversionResult) -> String {
        let value = json!({
            "category": result.request.category,
            "from_unit": result.request.from_unit,
            "to_unit": result.request.to_unit,
            "value": result.request.value,
            "result": result.value,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an assistant conversion as JSON
    pub fn format_assistant_conversion_json(
        request: &ConversionRequest,
        reply: &AssistantReply,
    ) -> String {
        let value = json!({
            "category": request.category,
            "from_unit": request.from_unit,
            "to_unit": request.to_unit,
            "value": request.value,
            "prompt": request.to_prompt().content(),
            "reply": reply,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a chat reply as JSON
    pub fn format_reply_json(prompt: &Prompt, reply: &AssistantReply) -> String {
        let value = json!({
            "prompt": prompt.content(),
            "reply": reply,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a unit listing as JSON
    pub fn format_units_json(category: Category, units: &[&str], base: Option<&str>) -> String {
        let value = json!({
            "category": category,
            "base_unit": base,
            "units": units,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the category list as JSON
    pub fn format_categories_json(categories: &[Category]) -> String {
        serde_json::to_string_pretty(&json!({ "categories": categories }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a local failure as JSON
    pub fn format_error_json(error: &DomainError) -> String {
        serde_json::to_string_pretty(&json!({ "error": error.to_string() }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Boxed title used by the interactive session
    pub fn header(title: &str) -> String {
        let line = "─".repeat(45);
        format!("╭{}╮\n│{:^45}│\n╰{}╯", line, title, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitchat_domain::ConversionTable;

    fn plain() {
        colored::control::set_override(false);
    }

    fn request(category: Category, from: &str, to: &str, value: f64) -> ConversionRequest {
        ConversionRequest::new(ConversionTable::standard(), category, from, to, value).unwrap()
    }

    #[test]
    fn test_format_conversion() {
        plain();
        let result = request(Category::Length, "meter", "kilometer", 1000.0)
            .convert_with(ConversionTable::standard())
            .unwrap();
        assert_eq!(
            ConsoleFormatter::format_conversion(&result),
            "Converted Value: 1.0 kilometer"
        );
    }

    #[test]
    fn test_format_conversion_error() {
        plain();
        let err = DomainError::UnknownCategory("speed".to_string());
        assert_eq!(
            ConsoleFormatter::format_conversion_error(&err),
            "Conversion error: unknown category 'speed'"
        );
    }

    #[test]
    fn test_format_reply() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_reply(&AssistantReply::answer(" 8.05 km ")),
            "8.05 km"
        );
        assert_eq!(
            ConsoleFormatter::format_reply(&AssistantReply::failed("Rate limited: quota")),
            "Error: Rate limited: quota"
        );
    }

    #[test]
    fn test_format_transcript() {
        plain();
        let mut transcript = Transcript::new();
        transcript.push_you("hi");
        transcript.push_bot("hello");
        assert_eq!(
            ConsoleFormatter::format_transcript(&transcript),
            "You: hi\nBot: hello"
        );
    }

    #[test]
    fn test_format_units_marks_base() {
        plain();
        let output =
            ConsoleFormatter::format_units(Category::Length, &["meter", "mile"], Some("meter"));
        assert_eq!(output, "length units:\n  meter (base)\n  mile\n");
    }

    #[test]
    fn test_format_conversion_json() {
        let result = request(Category::Weight, "kilogram", "gram", 1.0)
            .convert_with(ConversionTable::standard())
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_conversion_json(&result)).unwrap();
        assert_eq!(json["category"], "weight");
        assert_eq!(json["to_unit"], "gram");
        assert!((json["result"].as_f64().unwrap() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_assistant_conversion_json() {
        let request = request(Category::Length, "mile", "kilometer", 5.0);
        let reply = AssistantReply::failed("Timed out");
        let json: serde_json::Value = serde_json::from_str(
            &ConsoleFormatter::format_assistant_conversion_json(&request, &reply),
        )
        .unwrap();
        assert_eq!(json["prompt"], "Convert 5.0 mile to kilometer.");
        assert_eq!(json["reply"]["status"], "failed");
        assert_eq!(json["reply"]["text"], "Timed out");
    }

    #[test]
    fn test_format_categories_json() {
        let json: serde_json::Value = serde_json::from_str(
            &ConsoleFormatter::format_categories_json(&Category::ALL),
        )
        .unwrap();
        assert_eq!(json["categories"][2], "temperature");
    }
}
