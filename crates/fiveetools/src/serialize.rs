//! Encoding of the typed wire model into 5etools adventure JSON.
//!
//! Output field order is `type, name, page, id, entries`, zero-valued
//! fields are omitted and text entries are written as bare strings.

use crate::error::EncodeError;
use crate::types::*;
use crate::EncodeOptions;

/// Encode a 5etools document as JSON bytes.
pub fn encode(adventure: &Adventure, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    for (i, section) in adventure.sections.iter().enumerate() {
        check_entries(&section.entries, &format!("data[{}]", i))?;
    }

    let bytes = if options.pretty {
        serde_json::to_vec_pretty(adventure)?
    } else {
        serde_json::to_vec(adventure)?
    };
    Ok(bytes)
}

/// Reject branches the decoder could not read back as branches.
fn check_entries(entries: &[Entry], path: &str) -> Result<(), EncodeError> {
    for (i, entry) in entries.iter().enumerate() {
        if let Entry::Branch(branch) = entry {
            let entry_path = format!("{}.entries[{}]", path, i);
            if branch.kind.is_empty() {
                return Err(EncodeError::Unrepresentable {
                    path: entry_path,
                    message: "branch entry has an empty type".to_string(),
                });
            }
            check_entries(&branch.entries, &entry_path)?;
        }
    }
    Ok(())
}
