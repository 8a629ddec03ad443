use crate::view_model::{ChatViewModel, MessageView, ModalView, PromptView};
use crate::{ArticleRecord, ChatEntry, EnrichmentView, SelectionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    messages: Vec<ChatEntry>,
    input: String,
    loading: bool,
    selection: SelectionState,
    dirty: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the current state for rendering. Enrichment blocks are
    /// reclassified on every call.
    pub fn view(&self) -> ChatViewModel {
        let last = self.messages.len().saturating_sub(1);
        let messages = self
            .messages
            .iter()
            .enumerate()
            .map(|(index, entry)| MessageView {
                index,
                role: entry.message.role,
                content: entry.message.content.clone(),
                enrichment: EnrichmentView::from_extra(entry.extra.as_ref()),
                divider_after: index < last,
            })
            .collect();

        let modal = self.selection.is_open().then(|| {
            let current = self.selection.current();
            ModalView {
                title: current.title.clone(),
                summary: current.summary.clone(),
                source: current.source.clone(),
                href: current.href.clone(),
                close_label: "Close",
                open_full_label: "Open full",
            }
        });

        ChatViewModel {
            messages,
            modal,
            prompt: PromptView {
                input: self.input.clone(),
                placeholder: "Send a message...",
                submit_enabled: !self.loading && !self.input.is_empty(),
            },
            dirty: self.dirty,
        }
    }

    pub fn messages(&self) -> &[ChatEntry] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn push_message(&mut self, entry: ChatEntry) {
        self.messages.push(entry);
        self.mark_dirty();
    }

    /// The open modal belongs to the old transcript, so it is closed.
    pub(crate) fn replace_messages(&mut self, entries: Vec<ChatEntry>) {
        self.messages = entries;
        self.selection.close();
        self.mark_dirty();
    }

    /// Returns false when no message sits at `index`.
    pub(crate) fn set_articles(&mut self, index: usize, articles: Vec<ArticleRecord>) -> bool {
        let Some(entry) = self.messages.get_mut(index) else {
            return false;
        };
        entry.extra.get_or_insert_with(Default::default).articles = articles;
        self.mark_dirty();
        true
    }

    pub(crate) fn entry(&self, index: usize) -> Option<&ChatEntry> {
        self.messages.get(index)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn take_input(&mut self) -> String {
        self.mark_dirty();
        std::mem::take(&mut self.input)
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.mark_dirty();
        }
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionState {
        self.mark_dirty();
        &mut self.selection
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
