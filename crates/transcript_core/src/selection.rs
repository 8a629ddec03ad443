/// Detail payload shown in the source modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub title: String,
    pub summary: String,
    pub href: String,
    pub source: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            title: "news title".to_string(),
            summary: "empty summary".to_string(),
            href: "#".to_string(),
            source: "http://".to_string(),
        }
    }
}

/// Holds the opened source and whether its modal is visible.
///
/// Last write wins. Closing keeps the selection, so a reopen briefly shows
/// the previous values until the next `select`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    current: Selection,
    open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        href: impl Into<String>,
        source: impl Into<String>,
    ) {
        self.current = Selection {
            title: title.into(),
            summary: summary.into(),
            href: href.into(),
            source: source.into(),
        };
        self.open();
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
