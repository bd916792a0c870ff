//! Adventure formats the CLI can read and write.

use advconv_core::Adventure;
use advconv_fiveetools::{DecodeError, DecodeOptions, EncodeError, EncodeOptions};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// 5etools adventure JSON
    #[value(name = "5etools")]
    FiveETools,
}

impl Format {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Format::FiveETools => "5etools",
        }
    }

    pub(crate) fn parse(
        self,
        bytes: &[u8],
        options: &DecodeOptions,
    ) -> Result<Adventure, FormatError> {
        match self {
            Format::FiveETools => Ok(advconv_fiveetools::parse_with(bytes, options)?),
        }
    }

    pub(crate) fn serialize(
        self,
        adventure: &Adventure,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>, FormatError> {
        match self {
            Format::FiveETools => Ok(advconv_fiveetools::serialize_with(adventure, options)?),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum FormatError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
