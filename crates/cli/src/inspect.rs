use std::path::Path;
use std::process;

use advconv_core::Adventure;
use advconv_fiveetools::DecodeOptions;

use crate::format::Format;
use crate::{report_error, OutputFormat};

/// Run the `advconv inspect` command: parse a document and print its outline.
pub(crate) fn cmd_inspect(
    file: &Path,
    format: Format,
    strict: bool,
    output: OutputFormat,
    quiet: bool,
) {
    let bytes = match std::fs::read(file) {
        Ok(b) => b,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let options = DecodeOptions {
        strict,
        ..DecodeOptions::default()
    };
    let adventure = match format.parse(&bytes, &options) {
        Ok(a) => a,
        Err(e) => {
            let msg = format!(
                "error parsing {} document '{}': {}",
                format.name(),
                file.display(),
                e
            );
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => print!("{}", outline(&adventure)),
        OutputFormat::Json => println!("{}", outline_json(&adventure)),
    }
}

fn outline(adventure: &Adventure) -> String {
    let mut out = String::new();
    for (i, section) in adventure.sections.iter().enumerate() {
        let name = if section.name.is_empty() {
            "(unnamed)"
        } else {
            section.name.as_str()
        };
        out.push_str(&format!("{:>3}. {}", i + 1, name));
        if !section.kind.is_empty() {
            out.push_str(&format!(" [{}]", section.kind));
        }
        if section.page > 0 {
            out.push_str(&format!(" p.{}", section.page));
        }
        if !section.id.is_empty() {
            out.push_str(&format!(" #{}", section.id));
        }
        out.push_str(&format!(" ({} entries)\n", section.entries.len()));
    }
    out.push_str(&format!(
        "{} sections, {} entries, max depth {}\n",
        adventure.sections.len(),
        adventure.entry_count(),
        adventure.max_depth()
    ));
    out
}

fn outline_json(adventure: &Adventure) -> serde_json::Value {
    let sections: Vec<serde_json::Value> = adventure
        .sections
        .iter()
        .map(|s| {
            serde_json::json!({
                "type": s.kind,
                "name": s.name,
                "page": s.page,
                "id": s.id,
                "entries": s.entries.len(),
            })
        })
        .collect();
    serde_json::json!({
        "sections": sections,
        "entries": adventure.entry_count(),
        "max_depth": adventure.max_depth(),
    })
}
