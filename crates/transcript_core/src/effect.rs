#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the prompt text, as typed, to the chat backend.
    SubmitPrompt { text: String },
    /// Open a source's full page outside the transcript view.
    OpenExternal { href: String },
}
