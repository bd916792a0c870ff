//! Projection of the 5etools wire model onto the canonical adventure tree.

use crate::types;
use advconv_core::{Adventure, Entry, Section};

/// Convert a decoded 5etools document into the canonical model.
///
/// Section and entry order is preserved at every depth.
pub fn normalize(adventure: types::Adventure) -> Adventure {
    Adventure {
        sections: adventure
            .sections
            .into_iter()
            .map(normalize_section)
            .collect(),
    }
}

fn normalize_section(section: types::Section) -> Section {
    Section {
        kind: section.kind,
        name: section.name,
        page: section.page,
        id: section.id,
        entries: normalize_entries(section.entries),
    }
}

fn normalize_entries(entries: Vec<types::Entry>) -> Vec<Entry> {
    entries.into_iter().map(normalize_entry).collect()
}

fn normalize_entry(entry: types::Entry) -> Entry {
    match entry {
        types::Entry::Text(value) => Entry::Text { value },
        types::Entry::Branch(branch) => Entry::Branch {
            kind: branch.kind,
            id: branch.id,
            entries: normalize_entries(branch.entries),
        },
    }
}
