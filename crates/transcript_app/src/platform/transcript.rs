use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use transcript_core::{ArticleRecord, ChatEntry, Message, MessageExtra, Role};
use transcript_logging::{transcript_info, transcript_warn};
use url::Url;

use super::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StoredRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredArticle {
    url: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    fetched: Option<bool>,
    #[serde(default)]
    done: Option<bool>,
    #[serde(default)]
    error: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct StoredExtra {
    #[serde(default)]
    articles: Option<Vec<StoredArticle>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredMessage {
    role: StoredRole,
    content: String,
    #[serde(default)]
    extra: Option<StoredExtra>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct StoredTranscript {
    messages: Vec<StoredMessage>,
}

pub fn load_transcript(path: &Path) -> Result<Vec<ChatEntry>, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: PathBuf::from(path),
        source,
    })?;
    let entries = parse_transcript(&content)?;
    transcript_info!("Loaded {} messages from {:?}", entries.len(), path);
    Ok(entries)
}

/// Parses a transcript snapshot. Questionable article URLs are logged and kept.
pub fn parse_transcript(content: &str) -> Result<Vec<ChatEntry>, AppError> {
    let stored: StoredTranscript = serde_json::from_str(content)?;
    let entries = stored
        .messages
        .into_iter()
        .enumerate()
        .map(|(index, message)| {
            if let Some(articles) = message.extra.as_ref().and_then(|e| e.articles.as_ref()) {
                check_article_urls(index, articles);
            }
            into_entry(message)
        })
        .collect();
    Ok(entries)
}

fn into_entry(message: StoredMessage) -> ChatEntry {
    let role = match message.role {
        StoredRole::User => Role::User,
        StoredRole::Assistant => Role::Assistant,
    };
    let extra = message.extra.map(|extra| {
        MessageExtra::new(
            extra
                .articles
                .unwrap_or_default()
                .into_iter()
                .map(|article| ArticleRecord {
                    url: article.url,
                    title: article.title,
                    summary: article.summary,
                    fetched: article.fetched.unwrap_or(false),
                    done: article.done.unwrap_or(false),
                    error: article.error.unwrap_or(false),
                })
                .collect(),
        )
    });
    ChatEntry::new(Message::new(role, message.content), extra)
}

fn check_article_urls(message_index: usize, articles: &[StoredArticle]) {
    let mut seen = HashSet::new();
    for article in articles {
        match Url::parse(&article.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => transcript_warn!(
                "Message {} article {} uses scheme {:?}; domain will be approximate",
                message_index,
                article.url,
                url.scheme()
            ),
            Err(err) => transcript_warn!(
                "Message {} article {:?} is not a valid URL: {}",
                message_index,
                article.url,
                err
            ),
        }
        if !seen.insert(article.url.as_str()) {
            transcript_warn!(
                "Message {} lists article {} more than once",
                message_index,
                article.url
            );
        }
    }
}
