//! Transcript core: article enrichment classification, source selection and
//! the pure chat state machine.
mod article;
mod domain;
mod effect;
mod list;
mod msg;
mod phase;
mod selection;
mod state;
mod update;
mod view_model;

pub use article::{ArticleRecord, ChatEntry, Message, MessageExtra, Role};
pub use domain::extract_domain;
pub use effect::Effect;
pub use list::format_list;
pub use msg::Msg;
pub use phase::{
    classify, EnrichmentView, Phase, Placement, ProcessingEntry, SourceLink, SOURCES_HEADING,
};
pub use selection::{Selection, SelectionState};
pub use state::ChatState;
pub use update::update;
pub use view_model::{ChatViewModel, MessageView, ModalView, PromptView};
