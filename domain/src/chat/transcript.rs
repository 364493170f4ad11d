//! Chat transcript entities

use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    You,
    Bot,
}

impl Speaker {
    /// Label shown in front of the entry text
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Bot => "Bot",
        }
    }
}

/// A single line of the transcript (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn you(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::You,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.speaker.label(), self.text)
    }
}

/// Append-only record of a chat session (Entity)
///
/// Lives as long as the interactive session that owns it. Entries are only
/// ever added, never edited or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_you(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::you(text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::bot(text));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entries rendered as display lines (`"You: ..."`, `"Bot: ..."`)
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
