use crate::{EnrichmentView, Role};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewModel {
    /// Empty when the transcript has no messages; nothing is drawn then.
    pub messages: Vec<MessageView>,
    /// Present only while the source modal is open.
    pub modal: Option<ModalView>,
    pub prompt: PromptView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub index: usize,
    pub role: Role,
    pub content: String,
    pub enrichment: EnrichmentView,
    /// A separator follows every message except the last.
    pub divider_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub href: String,
    pub close_label: &'static str,
    pub open_full_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptView {
    pub input: String,
    pub placeholder: &'static str,
    pub submit_enabled: bool,
}
