//! Projection of the canonical adventure tree back onto the 5etools wire model.

use crate::types;
use advconv_core::{Adventure, Entry, Section};

/// Build the 5etools representation of a canonical document.
pub fn denormalize(adventure: &Adventure) -> types::Adventure {
    types::Adventure {
        sections: adventure.sections.iter().map(denormalize_section).collect(),
    }
}

fn denormalize_section(section: &Section) -> types::Section {
    types::Section {
        kind: section.kind.clone(),
        name: section.name.clone(),
        page: section.page,
        id: section.id.clone(),
        entries: denormalize_entries(&section.entries),
    }
}

fn denormalize_entries(entries: &[Entry]) -> Vec<types::Entry> {
    entries.iter().map(denormalize_entry).collect()
}

fn denormalize_entry(entry: &Entry) -> types::Entry {
    match entry {
        Entry::Text { value } => types::Entry::Text(value.clone()),
        Entry::Branch { kind, id, entries } => types::Entry::Branch(types::Branch {
            kind: kind.clone(),
            id: id.clone(),
            entries: denormalize_entries(entries),
        }),
    }
}
