use transcript_core::Effect;
use transcript_logging::{transcript_info, transcript_warn};

/// Executes effects emitted by `update`. There is no chat backend or browser
/// behind the CLI, so effects become notices printed after the transcript.
#[derive(Debug, Default)]
pub struct EffectRunner {
    notices: Vec<String>,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitPrompt { text } => {
                    transcript_warn!("SubmitPrompt len={} dropped: no backend", text.len());
                    self.notices
                        .push(format!("Prompt not sent (no chat backend): {text}"));
                }
                Effect::OpenExternal { href } => {
                    transcript_info!("OpenExternal href={}", href);
                    self.notices.push(format!("Open full: {href}"));
                }
            }
        }
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}
