use pretty_assertions::assert_eq;
use transcript_core::{
    classify, extract_domain, format_list, ArticleRecord, EnrichmentView, MessageExtra, Phase,
    Placement, ProcessingEntry, SourceLink,
};

fn waiting(url: &str) -> ArticleRecord {
    ArticleRecord::new(url)
}

fn processing(url: &str) -> ArticleRecord {
    ArticleRecord {
        fetched: true,
        ..ArticleRecord::new(url)
    }
}

fn done(url: &str, title: &str, summary: &str) -> ArticleRecord {
    ArticleRecord {
        title: Some(title.to_string()),
        summary: Some(summary.to_string()),
        fetched: true,
        done: true,
        ..ArticleRecord::new(url)
    }
}

fn failed(url: &str) -> ArticleRecord {
    ArticleRecord {
        error: true,
        ..ArticleRecord::new(url)
    }
}

#[test]
fn domain_and_list_helpers_match_documented_examples() {
    assert_eq!(extract_domain("https://www.example.com/a/b?x=1"), "example.com");
    assert_eq!(extract_domain("example.co.uk/page"), "co.uk");
    assert_eq!(format_list::<&str>(&[]), "");
    assert_eq!(format_list(&["a"]), "a");
    assert_eq!(format_list(&["a", "b"]), "a and b");
    assert_eq!(format_list(&["a", "b", "c"]), "a, b and c");
}

#[test]
fn unfetched_article_holds_whole_message_in_waiting() {
    let articles = vec![
        waiting("https://www.example.com/x"),
        done("https://b.com", "T", "S"),
    ];
    assert_eq!(classify(&articles), Phase::Waiting);

    let view = EnrichmentView::from_articles(&articles);
    assert_eq!(
        view,
        EnrichmentView::Waiting {
            domains: vec!["example.com".to_string()],
            text: "Fetching data from example.com...".to_string(),
        }
    );
    assert_eq!(view.placement(), Placement::BeforeContent);
}

#[test]
fn waiting_text_lists_each_domain_once() {
    let articles = vec![
        waiting("https://news.a.com/1"),
        waiting("https://b.org/2"),
        waiting("http://www.a.com/3"),
        waiting("https://c.net"),
        failed("https://d.io"),
        processing("https://e.dev"),
    ];
    match EnrichmentView::from_articles(&articles) {
        EnrichmentView::Waiting { domains, text } => {
            assert_eq!(domains, vec!["a.com", "b.org", "c.net"]);
            assert_eq!(text, "Fetching data from a.com, b.org and c.net...");
        }
        other => panic!("expected waiting, got {other:?}"),
    }
}

#[test]
fn processing_enumerates_non_errored_articles_in_order() {
    let articles = vec![
        processing("http://a.com"),
        failed("http://broken.com"),
        done("http://b.com", "T", "summary"),
    ];
    assert_eq!(classify(&articles), Phase::Processing);

    let view = EnrichmentView::from_articles(&articles);
    assert_eq!(
        view,
        EnrichmentView::Processing {
            entries: vec![
                ProcessingEntry {
                    number: 1,
                    url: "http://a.com".to_string(),
                    done: false,
                    text: "Processing data from a.com...".to_string(),
                },
                ProcessingEntry {
                    number: 2,
                    url: "http://b.com".to_string(),
                    done: true,
                    text: "Read: T".to_string(),
                },
            ],
        }
    );
}

#[test]
fn finished_lists_only_successful_sources() {
    let articles = vec![
        done("http://a.com", "T1", "first"),
        failed("http://b.com"),
    ];
    assert_eq!(classify(&articles), Phase::Finished);

    let view = EnrichmentView::from_articles(&articles);
    assert_eq!(
        view,
        EnrichmentView::Finished {
            heading: "Sources:".to_string(),
            sources: vec![SourceLink {
                url: "http://a.com".to_string(),
                title: "T1".to_string(),
                summary: "first".to_string(),
                source: "a.com".to_string(),
            }],
        }
    );
    assert_eq!(view.placement(), Placement::AfterContent);
    assert!(view.source("http://b.com").is_none());
}

#[test]
fn absent_or_empty_articles_render_nothing() {
    assert_eq!(EnrichmentView::from_extra(None), EnrichmentView::Empty);
    assert_eq!(
        EnrichmentView::from_extra(Some(&MessageExtra::default())),
        EnrichmentView::Empty
    );
}

#[test]
fn classification_is_repeatable_across_snapshots() {
    let mut articles = vec![waiting("https://a.com"), waiting("https://b.com")];
    let first = EnrichmentView::from_articles(&articles);
    assert_eq!(first, EnrichmentView::from_articles(&articles));

    articles[0].fetched = true;
    articles[1].error = true;
    assert_eq!(classify(&articles), Phase::Processing);

    articles[0].done = true;
    articles[0].title = Some("A".to_string());
    let finished = EnrichmentView::from_articles(&articles);
    assert_eq!(finished.phase(), Phase::Finished);
    assert_eq!(finished, EnrichmentView::from_articles(&articles));
}
