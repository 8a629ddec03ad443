/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    User,
    #[default]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub role: Role,
    /// Markdown body, handed to the renderer untouched.
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// One background source lookup attached to an assistant message.
///
/// Records are owned by the enrichment pipeline; the core only reads them.
/// `url` identifies the record within its message. `error` is terminal: once
/// set, `fetched` and `done` are no longer advanced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleRecord {
    pub url: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub fetched: bool,
    pub done: bool,
    pub error: bool,
}

impl ArticleRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Still fetching raw content.
    pub fn is_waiting(&self) -> bool {
        !self.fetched && !self.error
    }

    /// Not yet summarized, whether or not fetching has finished.
    pub fn is_pending(&self) -> bool {
        !self.done && !self.error
    }

    /// Reached a terminal state, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.done || self.error
    }
}

/// Per-message side channel written by the enrichment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageExtra {
    pub articles: Vec<ArticleRecord>,
}

impl MessageExtra {
    pub fn new(articles: Vec<ArticleRecord>) -> Self {
        Self { articles }
    }
}

/// A transcript message together with its optional enrichment payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatEntry {
    pub message: Message,
    pub extra: Option<MessageExtra>,
}

impl ChatEntry {
    pub fn new(message: Message, extra: Option<MessageExtra>) -> Self {
        Self { message, extra }
    }

    pub fn articles(&self) -> &[ArticleRecord] {
        self.extra
            .as_ref()
            .map(|extra| extra.articles.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fetched: bool, done: bool, error: bool) -> ArticleRecord {
        ArticleRecord {
            fetched,
            done,
            error,
            ..ArticleRecord::new("https://example.com")
        }
    }

    #[test]
    fn predicates_follow_lookup_progress() {
        let fetching = record(false, false, false);
        assert!(fetching.is_waiting() && fetching.is_pending() && !fetching.is_settled());

        let processing = record(true, false, false);
        assert!(!processing.is_waiting() && processing.is_pending());

        let finished = record(true, true, false);
        assert!(!finished.is_pending() && finished.is_settled());
    }

    #[test]
    fn error_counts_as_settled_but_not_pending() {
        let failed = record(false, false, true);
        assert!(!failed.is_waiting());
        assert!(!failed.is_pending());
        assert!(failed.is_settled());
    }

    #[test]
    fn entry_without_extra_has_no_articles() {
        let entry = ChatEntry::new(Message::new(Role::Assistant, "hi"), None);
        assert!(entry.articles().is_empty());
    }
}
