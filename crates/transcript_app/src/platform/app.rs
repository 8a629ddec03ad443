use std::path::PathBuf;

use transcript_core::{update, ChatEntry, ChatState, ChatViewModel, Msg};
use transcript_logging::{transcript_debug, transcript_error, transcript_trace};

use super::ui::render::{render, RenderOptions};
use super::{load_config, load_transcript, logging, Cli, EffectRunner, CONFIG_FILENAME};

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let config = load_config(&config_path)?;
    logging::initialize(cli.log.unwrap_or(config.log_destination));

    let entries = load_transcript(&cli.transcript).inspect_err(|err| {
        transcript_error!("Failed to load transcript {:?}: {}", cli.transcript, err);
    })?;
    let session = drive(&cli, entries);

    let options = RenderOptions {
        show_modal_source: config.show_modal_source,
    };
    print!("{}", render(&session.view(), &options)?);
    for notice in session.notices() {
        println!("{notice}");
    }
    Ok(())
}

/// Replays the CLI's user actions against a freshly loaded transcript.
pub fn drive(cli: &Cli, entries: Vec<ChatEntry>) -> Session {
    let mut session = Session::new();
    session.dispatch(Msg::TranscriptReplaced(entries));

    if let Some(source) = &cli.select {
        session.dispatch(Msg::SourceClicked {
            message_index: source.message_index,
            url: source.url.clone(),
        });
        if cli.open_full {
            session.dispatch(Msg::OpenFullClicked);
        }
    }

    if let Some(prompt) = &cli.prompt {
        session.dispatch(Msg::InputChanged(prompt.clone()));
        session.dispatch(Msg::PromptSubmitted);
    }

    session
}

/// Owns the chat state and routes effects, the way a UI event loop would.
#[derive(Debug, Default)]
pub struct Session {
    state: ChatState,
    effects: EffectRunner,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `msg` and reports whether a re-render is due.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        transcript_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        transcript_trace!("update produced {} effects", effects.len());
        self.state = state;
        self.effects.enqueue(effects);
        self.state.consume_dirty()
    }

    pub fn view(&self) -> ChatViewModel {
        self.state.view()
    }

    pub fn notices(&self) -> &[String] {
        self.effects.notices()
    }
}
