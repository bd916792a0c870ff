use std::path::Path;
use std::process;

use advconv_fiveetools::{DecodeOptions, EncodeOptions};

use crate::format::Format;
use crate::{report_error, OutputFormat};

pub(crate) struct ConvertOptions<'a> {
    pub source: &'a Path,
    pub format: Format,
    pub destination: &'a Path,
    pub target: Format,
    pub strict: bool,
    pub max_depth: Option<usize>,
    pub pretty: bool,
    pub output: OutputFormat,
    pub quiet: bool,
}

/// Run the `advconv convert` command.
///
/// The destination is only written once the whole document has been
/// decoded and re-encoded.
pub(crate) fn cmd_convert(opts: ConvertOptions<'_>) {
    let bytes = match std::fs::read(opts.source) {
        Ok(b) => b,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", opts.source.display(), e);
            report_error(&msg, opts.output, opts.quiet);
            process::exit(1);
        }
    };

    let decode_options = DecodeOptions {
        strict: opts.strict,
        max_depth: opts.max_depth,
    };
    let adventure = match opts.format.parse(&bytes, &decode_options) {
        Ok(a) => a,
        Err(e) => {
            let msg = format!(
                "error parsing {} document '{}': {}",
                opts.format.name(),
                opts.source.display(),
                e
            );
            report_error(&msg, opts.output, opts.quiet);
            process::exit(1);
        }
    };

    let encode_options = EncodeOptions { pretty: opts.pretty };
    let out = match opts.target.serialize(&adventure, &encode_options) {
        Ok(b) => b,
        Err(e) => {
            let msg = format!("error serializing {} document: {}", opts.target.name(), e);
            report_error(&msg, opts.output, opts.quiet);
            process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(opts.destination, &out) {
        let msg = format!(
            "error writing file '{}': {}",
            opts.destination.display(),
            e
        );
        report_error(&msg, opts.output, opts.quiet);
        process::exit(1);
    }

    tracing::info!(
        source = %opts.source.display(),
        destination = %opts.destination.display(),
        format = opts.format.name(),
        target = opts.target.name(),
        "converted adventure"
    );

    if opts.quiet {
        return;
    }
    let sections = adventure.sections.len();
    let entries = adventure.entry_count();
    match opts.output {
        OutputFormat::Text => {
            println!(
                "converted {} ({}) -> {} ({}): {} sections, {} entries, {} bytes",
                opts.source.display(),
                opts.format.name(),
                opts.destination.display(),
                opts.target.name(),
                sections,
                entries,
                out.len()
            );
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "source": opts.source.display().to_string(),
                "format": opts.format.name(),
                "destination": opts.destination.display().to_string(),
                "target": opts.target.name(),
                "sections": sections,
                "entries": entries,
                "bytes": out.len(),
            });
            println!("{}", summary);
        }
    }
}
