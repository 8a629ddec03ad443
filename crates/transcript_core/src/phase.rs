use crate::list::dedupe_first_seen;
use crate::{extract_domain, format_list, ArticleRecord, MessageExtra};

/// Aggregate display state of a message's article set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Processing,
    Finished,
    Empty,
}

type PhasePredicate = fn(&[ArticleRecord]) -> bool;

/// Checked top to bottom; the first matching predicate wins. Several rows can
/// hold at once while articles are in flight, so the order is load-bearing.
const PHASE_TABLE: [(Phase, PhasePredicate); 3] = [
    (Phase::Waiting, any_waiting),
    (Phase::Processing, any_pending),
    (Phase::Finished, all_settled),
];

fn any_waiting(articles: &[ArticleRecord]) -> bool {
    articles.iter().any(ArticleRecord::is_waiting)
}

fn any_pending(articles: &[ArticleRecord]) -> bool {
    articles.iter().any(ArticleRecord::is_pending)
}

fn all_settled(articles: &[ArticleRecord]) -> bool {
    !articles.is_empty() && articles.iter().all(ArticleRecord::is_settled)
}

/// Classifies the current snapshot of a message's articles.
pub fn classify(articles: &[ArticleRecord]) -> Phase {
    PHASE_TABLE
        .iter()
        .find(|(_, matches)| matches(articles))
        .map(|(phase, _)| *phase)
        .unwrap_or(Phase::Empty)
}

pub const SOURCES_HEADING: &str = "Sources:";

/// Phase-tagged payload handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentView {
    Waiting {
        /// Distinct domains still being fetched, first-seen order.
        domains: Vec<String>,
        text: String,
    },
    Processing {
        entries: Vec<ProcessingEntry>,
    },
    Finished {
        heading: String,
        sources: Vec<SourceLink>,
    },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingEntry {
    /// 1-based position among the non-errored articles.
    pub number: usize,
    pub url: String,
    pub done: bool,
    pub text: String,
}

/// A finished article the user can open in the source modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub source: String,
}

impl SourceLink {
    fn from_record(article: &ArticleRecord) -> Self {
        Self {
            url: article.url.clone(),
            title: article.title.clone().unwrap_or_default(),
            summary: article.summary.clone().unwrap_or_default(),
            source: extract_domain(&article.url),
        }
    }
}

/// Whether a block is drawn above or below the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    BeforeContent,
    AfterContent,
    Hidden,
}

impl EnrichmentView {
    pub fn from_extra(extra: Option<&MessageExtra>) -> Self {
        Self::from_articles(extra.map(|e| e.articles.as_slice()).unwrap_or_default())
    }

    /// Recomputes the payload from scratch; nothing is cached between calls.
    pub fn from_articles(articles: &[ArticleRecord]) -> Self {
        match classify(articles) {
            Phase::Waiting => {
                let domains = dedupe_first_seen(
                    articles
                        .iter()
                        .filter(|a| a.is_waiting())
                        .map(|a| extract_domain(&a.url)),
                );
                let text = format!("Fetching data from {}...", format_list(&domains));
                EnrichmentView::Waiting { domains, text }
            }
            Phase::Processing => {
                let entries = articles
                    .iter()
                    .filter(|a| !a.error)
                    .enumerate()
                    .map(|(index, article)| ProcessingEntry {
                        number: index + 1,
                        url: article.url.clone(),
                        done: article.done,
                        text: processing_text(article),
                    })
                    .collect();
                EnrichmentView::Processing { entries }
            }
            Phase::Finished => EnrichmentView::Finished {
                heading: SOURCES_HEADING.to_string(),
                // Errored articles are dropped without any notice.
                sources: articles
                    .iter()
                    .filter(|a| a.done)
                    .map(SourceLink::from_record)
                    .collect(),
            },
            Phase::Empty => EnrichmentView::Empty,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            EnrichmentView::Waiting { .. } => Phase::Waiting,
            EnrichmentView::Processing { .. } => Phase::Processing,
            EnrichmentView::Finished { .. } => Phase::Finished,
            EnrichmentView::Empty => Phase::Empty,
        }
    }

    pub fn placement(&self) -> Placement {
        match self.phase() {
            Phase::Waiting | Phase::Processing => Placement::BeforeContent,
            Phase::Finished => Placement::AfterContent,
            Phase::Empty => Placement::Hidden,
        }
    }

    pub fn source(&self, url: &str) -> Option<&SourceLink> {
        match self {
            EnrichmentView::Finished { sources, .. } => sources.iter().find(|s| s.url == url),
            _ => None,
        }
    }
}

fn processing_text(article: &ArticleRecord) -> String {
    if article.done {
        format!("Read: {}", article.title.as_deref().unwrap_or_default())
    } else {
        format!("Processing data from {}...", extract_domain(&article.url))
    }
}
