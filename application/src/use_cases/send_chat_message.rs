//! Send Chat Message use case.
//!
//! Appends one exchange to a session's transcript. The transcript is passed
//! in by the session that owns it; previous turns are shown to the user but
//! never sent back to the assistant.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::ask_assistant::AskAssistantUseCase;
use tracing::debug;
use unitchat_domain::{AssistantReply, Prompt, Transcript};

/// Use case for the free-text chat
#[derive(Clone)]
pub struct SendChatMessageUseCase {
    assistant: AskAssistantUseCase,
}

impl SendChatMessageUseCase {
    pub fn new(assistant: AskAssistantUseCase) -> Self {
        Self { assistant }
    }

    /// Send without progress reporting
    pub async fn execute(&self, transcript: &mut Transcript, input: &str) -> Option<AssistantReply> {
        self.execute_with_progress(transcript, input, &NoProgress)
            .await
    }

    /// Record `input`, ask the assistant, and record its reply.
    ///
    /// Blank input is ignored and leaves the transcript untouched.
    pub async fn execute_with_progress(
        &self,
        transcript: &mut Transcript,
        input: &str,
        progress: &dyn ProgressNotifier,
    ) -> Option<AssistantReply> {
        let Ok(prompt) = Prompt::try_new(input) else {
            debug!("Ignoring blank chat input");
            return None;
        };

        transcript.push_you(input);
        let reply = self.assistant.execute_with_progress(&prompt, progress).await;
        transcript.push_bot(reply.display_text());

        Some(reply)
    }
}
