//! advconv-core: Format-agnostic adventure document model.
//!
//! Every format crate decodes into and encodes from the types defined
//! here. Nothing in this crate knows about any wire representation:
//!
//! - [`Adventure`] -- the whole document, an ordered list of sections
//! - [`Section`] -- a named, paged section owning a tree of entries
//! - [`Entry`] -- either a text leaf or a branch with child entries

pub mod adventure;

pub use adventure::{Adventure, Entry, Section, TEXT_KIND};
