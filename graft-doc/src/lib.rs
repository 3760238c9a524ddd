//! Document transclusion and format interop for the graft toolchain
//!
//!     This crate provides the graft document tree, a uniform interface for
//!     parsing/serializing that tree to concrete formats, and the
//!     transclusion resolver that merges multi-file documents into one tree.
//!
//!     This is a pure lib, that is, it powers the graft CLI but is shell
//!     agnostic: no code here should suppose a shell environment, be it std
//!     print, env vars etc. Resolution warnings accumulate in a Diagnostics
//!     sink for the caller to surface.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── ast                     # The document tree (blocks, inlines, metadata)
//!     ├── common                  # Format-agnostic helpers (path handling)
//!     ├── formats
//!     │   ├── markdown            # comrak-backed parser + hand serializer
//!     │   └── json                # serde-backed lossless tree format
//!     ├── resolve                 # The transclusion resolver
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     The heart of the crate is recursive transclusion (./resolve/mod.rs):
//!     a depth-first walk that splices included files into their host,
//!     shifting heading levels so nested documents fit the host's outline
//!     and rebasing relative resource paths so they stay resolvable from the
//!     top-level working directory. Everything else (formats, registry,
//!     path helpers) exists to serve that walk.
//!
//! Formats
//!
//!     Format capabilities are implemented with the Format trait: parse()
//!     and serialize(), a name and file extensions. See ./format.rs. The
//!     resolver reads a directive's `format` attribute and looks the parser
//!     up in the registry, so adding a format automatically makes it
//!     includable.
//!
//! Library Choices
//!
//!     Parsing is offloaded to specialized crates, comrak for CommonMark and
//!     serde_json for the tree format, and this crate only adapts their
//!     output to the graft tree. The markdown serializer is the one piece
//!     written by hand: comrak's arena AST is built for reading, not for
//!     being constructed from another tree.

pub mod ast;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod resolve;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use resolve::{Diagnostics, ResolveOptions, Resolver, Warning, WarningKind};
