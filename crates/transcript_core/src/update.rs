use transcript_logging::{transcript_debug, transcript_warn};

use crate::{ChatEntry, ChatState, Effect, EnrichmentView, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ChatState, msg: Msg) -> (ChatState, Vec<Effect>) {
    let effects = match msg {
        Msg::MessageAppended { message, extra } => {
            state.push_message(ChatEntry::new(message, extra));
            Vec::new()
        }
        Msg::ArticlesUpdated {
            message_index,
            articles,
        } => {
            if !state.set_articles(message_index, articles) {
                transcript_warn!(
                    "Ignoring article snapshot for missing message {}",
                    message_index
                );
            }
            Vec::new()
        }
        Msg::TranscriptReplaced(entries) => {
            state.replace_messages(entries);
            Vec::new()
        }
        Msg::InputChanged(input) => {
            state.set_input(input);
            Vec::new()
        }
        Msg::PromptSubmitted => {
            if state.input().trim().is_empty() {
                return (state, Vec::new());
            }
            let text = state.take_input();
            vec![Effect::SubmitPrompt { text }]
        }
        Msg::LoadingChanged(loading) => {
            state.set_loading(loading);
            Vec::new()
        }
        Msg::SourceClicked { message_index, url } => {
            let link = state.entry(message_index).and_then(|entry| {
                EnrichmentView::from_extra(entry.extra.as_ref())
                    .source(&url)
                    .cloned()
            });
            match link {
                Some(link) => {
                    transcript_debug!("Opening source {} from message {}", url, message_index);
                    state
                        .selection_mut()
                        .select(link.title, link.summary, link.url, link.source);
                }
                None => {
                    transcript_warn!(
                        "No finished source {} on message {}",
                        url,
                        message_index
                    );
                }
            }
            Vec::new()
        }
        Msg::SelectionClosed => {
            if state.selection().is_open() {
                state.selection_mut().close();
            }
            Vec::new()
        }
        Msg::OpenFullClicked => {
            if !state.selection().is_open() {
                return (state, Vec::new());
            }
            let href = state.selection().current().href.clone();
            state.selection_mut().close();
            vec![Effect::OpenExternal { href }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
