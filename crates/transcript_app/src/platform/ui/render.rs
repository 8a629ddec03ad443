use std::fmt::{self, Write};

use transcript_core::{
    ChatViewModel, EnrichmentView, MessageView, ModalView, Placement, PromptView, Role,
};

const DIVIDER: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_modal_source: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_modal_source: true,
        }
    }
}

/// Renders the view model as plain text, one block per message.
pub fn render(view: &ChatViewModel, options: &RenderOptions) -> Result<String, fmt::Error> {
    let mut out = String::new();

    for message in &view.messages {
        render_message(&mut out, message)?;
        if message.divider_after {
            writeln!(out, "{DIVIDER}")?;
        }
    }

    if let Some(modal) = &view.modal {
        render_modal(&mut out, modal, options)?;
    }

    render_prompt(&mut out, &view.prompt)?;
    Ok(out)
}

fn render_message(out: &mut String, message: &MessageView) -> fmt::Result {
    let role = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    writeln!(out, "[{role}]")?;

    let placement = message.enrichment.placement();
    if placement == Placement::BeforeContent {
        render_enrichment(out, &message.enrichment)?;
    }
    writeln!(out, "{}", message.content)?;
    if placement == Placement::AfterContent {
        render_enrichment(out, &message.enrichment)?;
    }
    Ok(())
}

fn render_enrichment(out: &mut String, enrichment: &EnrichmentView) -> fmt::Result {
    match enrichment {
        EnrichmentView::Waiting { text, .. } => {
            writeln!(out, "{text}")?;
        }
        EnrichmentView::Processing { entries } => {
            for entry in entries {
                writeln!(out, "{}. {}", entry.number, entry.text)?;
            }
        }
        EnrichmentView::Finished { heading, sources } => {
            writeln!(out, "{heading}")?;
            for source in sources {
                writeln!(out, "  - {} <{}>", source.title, source.url)?;
            }
        }
        EnrichmentView::Empty => {}
    }
    Ok(())
}

fn render_modal(out: &mut String, modal: &ModalView, options: &RenderOptions) -> fmt::Result {
    writeln!(out, "=== {} ===", modal.title)?;
    writeln!(out, "{}", modal.summary)?;
    if options.show_modal_source {
        writeln!(out, "_{}_", modal.source)?;
    }
    writeln!(
        out,
        "[{}] [{} -> {}]",
        modal.close_label, modal.open_full_label, modal.href
    )
}

fn render_prompt(out: &mut String, prompt: &PromptView) -> fmt::Result {
    let text = if prompt.input.is_empty() {
        prompt.placeholder
    } else {
        prompt.input.as_str()
    };
    let status = if prompt.submit_enabled { "send" } else { "send disabled" };
    writeln!(out, "> {text} ({status})")
}
