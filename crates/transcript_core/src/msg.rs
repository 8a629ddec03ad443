use crate::{ArticleRecord, ChatEntry, Message, MessageExtra};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A new message arrived on the transcript.
    MessageAppended {
        message: Message,
        extra: Option<MessageExtra>,
    },
    /// Enrichment pipeline published a fresh snapshot of a message's articles.
    ArticlesUpdated {
        message_index: usize,
        articles: Vec<ArticleRecord>,
    },
    /// Replace the whole transcript, e.g. when restoring a saved chat.
    TranscriptReplaced(Vec<ChatEntry>),
    /// User edited the prompt box.
    InputChanged(String),
    /// User pressed send.
    PromptSubmitted,
    /// Backend started or stopped answering.
    LoadingChanged(bool),
    /// User clicked a finished source link.
    SourceClicked { message_index: usize, url: String },
    /// User dismissed the source modal.
    SelectionClosed,
    /// User pressed "Open full" in the source modal.
    OpenFullClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
