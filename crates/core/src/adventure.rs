//! Canonical adventure tree.

/// Kind reported by every text leaf.
pub const TEXT_KIND: &str = "text";

/// A complete adventure document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adventure {
    pub sections: Vec<Section>,
}

impl Adventure {
    pub fn new(sections: Vec<Section>) -> Self {
        Adventure { sections }
    }

    /// Total number of entries across all sections, at every depth.
    pub fn entry_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| count_entries(&s.entries))
            .sum()
    }

    /// Deepest entry nesting in the document. Top-level section entries
    /// sit at depth 1; an adventure without entries has depth 0.
    pub fn max_depth(&self) -> usize {
        self.sections
            .iter()
            .map(|s| depth_of(&s.entries))
            .max()
            .unwrap_or(0)
    }
}

/// One section of an adventure.
///
/// An empty `id` means the section carries no identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub kind: String,
    pub name: String,
    pub page: u64,
    pub id: String,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Section {
            kind: kind.into(),
            name: name.into(),
            ..Section::default()
        }
    }
}

/// A node in a section's entry tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Leaf node holding a scalar string.
    Text { value: String },
    /// Inner node with a free-form kind and ordered children.
    /// An empty `id` means the branch carries no identifier.
    Branch {
        kind: String,
        id: String,
        entries: Vec<Entry>,
    },
}

impl Entry {
    pub fn text(value: impl Into<String>) -> Self {
        Entry::Text {
            value: value.into(),
        }
    }

    pub fn branch(kind: impl Into<String>, id: impl Into<String>, entries: Vec<Entry>) -> Self {
        Entry::Branch {
            kind: kind.into(),
            id: id.into(),
            entries,
        }
    }

    /// The entry's kind tag; always [`TEXT_KIND`] for leaves.
    pub fn kind(&self) -> &str {
        match self {
            Entry::Text { .. } => TEXT_KIND,
            Entry::Branch { kind, .. } => kind,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entry::Text { .. } => "",
            Entry::Branch { id, .. } => id,
        }
    }

    /// The scalar value of a text leaf, `None` for branches.
    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::Text { value } => Some(value),
            Entry::Branch { .. } => None,
        }
    }

    /// Child entries; empty for text leaves.
    pub fn children(&self) -> &[Entry] {
        match self {
            Entry::Text { .. } => &[],
            Entry::Branch { entries, .. } => entries,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Entry::Text { .. })
    }
}

fn count_entries(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| 1 + count_entries(e.children()))
        .sum()
}

fn depth_of(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| 1 + depth_of(e.children()))
        .max()
        .unwrap_or(0)
}
