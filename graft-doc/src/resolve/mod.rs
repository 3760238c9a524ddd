//! The transclusion resolver.
//!
//! Resolution is a depth-first, left-to-right walk over the block sequence.
//! Include directives (code blocks with the `include` class) are replaced in
//! place by the parsed contents of the files they name; directives nested in
//! those files resolve first, against their own file's directory, before the
//! parent's heading shift and path rewriting apply. A directive never
//! survives into the output, even when every file it names is broken:
//! leaving one in place would leak internal markup into rendered documents.
//!
//! Per-file state (the directory, and the last heading level seen for shift
//! inference) lives in an explicit [`Scope`] created fresh for every included
//! file, so a nested file's headings cannot leak into the parent's
//! inference. Failures degrade to warnings in a [`Diagnostics`] sink; the
//! resolver always returns a tree.
//!
//! Circular includes are detected: the resolver tracks the chain of files
//! currently being resolved and skips (with a warning) any file already on
//! it, instead of recursing until the stack gives out.

pub mod code;
pub mod diagnostics;
pub mod directive;
pub mod rewrite;
pub mod shift;

pub use diagnostics::{Diagnostics, Warning, WarningKind};
pub use directive::IncludeDirective;

use crate::ast::{Block, Document, Inline, Metadata};
use crate::common::paths;
use crate::registry::FormatRegistry;
use std::fs;
use std::path::{Path, PathBuf};

/// Behavior switches for a resolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    /// Infer a directive's heading shift from the last heading seen when no
    /// explicit `shift-heading-level-by` is given (`include-auto` metadata).
    pub auto_shift: bool,
    /// Rebase relative image and code-include paths in transcluded content
    /// (`update-contents` metadata).
    pub update_paths: bool,
    /// Skip files already being resolved on the current recursion branch.
    pub detect_cycles: bool,
    /// Format assumed for directives without a `format` attribute.
    pub default_format: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            auto_shift: false,
            update_paths: false,
            detect_cycles: true,
            default_format: "markdown".to_string(),
        }
    }
}

impl ResolveOptions {
    /// Turn flags on from document metadata (`include-auto`,
    /// `update-contents`). Metadata can only enable, not disable, so CLI or
    /// config settings survive documents that don't mention the flags.
    pub fn merge_metadata(&mut self, meta: &Metadata) {
        self.auto_shift = self.auto_shift || meta.flag("include-auto");
        self.update_paths = self.update_paths || meta.flag("update-contents");
    }
}

/// Per-file resolution state, created fresh for every included file.
struct Scope {
    /// Directory files named by directives in the current file are read from.
    read_dir: PathBuf,
    /// Level of the most recent heading in this file's lexical scope.
    last_heading_level: i64,
}

/// Resolves include directives in a document tree.
///
/// One resolver handles one document; diagnostics accumulate across the
/// whole run and are drained by the caller afterwards.
pub struct Resolver<'a> {
    registry: &'a FormatRegistry,
    options: ResolveOptions,
    diagnostics: Diagnostics,
    title: Option<Vec<Inline>>,
    in_progress: Vec<PathBuf>,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a FormatRegistry, options: ResolveOptions) -> Self {
        Resolver {
            registry,
            options,
            diagnostics: Diagnostics::new(),
            title: None,
            in_progress: Vec::new(),
        }
    }

    /// Resolve every include directive and code-include block in `doc`.
    ///
    /// `base_dir` is the directory of the document itself, the anchor for
    /// relative paths in its directives. Pass the path relative to the
    /// working directory (not canonicalized) when rewritten resource paths
    /// should stay relative, as a later rendering step expects.
    pub fn resolve(&mut self, mut doc: Document, base_dir: &Path) -> Document {
        self.options.merge_metadata(&doc.meta);

        let mut scope = Scope {
            read_dir: base_dir.to_path_buf(),
            last_heading_level: 0,
        };
        doc.blocks = self.resolve_blocks(doc.blocks, &mut scope);

        code::expand_code_includes(&mut doc.blocks, base_dir, &mut self.diagnostics);

        if let Some(title) = self.title.take() {
            doc.meta.title = Some(title);
        }
        doc
    }

    /// Warnings accumulated so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consume the resolver, returning its accumulated warnings.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn resolve_blocks(&mut self, blocks: Vec<Block>, scope: &mut Scope) -> Vec<Block> {
        let mut result = Vec::with_capacity(blocks.len());

        for block in blocks {
            match block {
                Block::Heading(heading) => {
                    scope.last_heading_level = heading.level;
                    result.push(Block::Heading(heading));
                }

                Block::CodeBlock(code_block) => {
                    match IncludeDirective::from_block(&code_block, &mut self.diagnostics) {
                        Some(directive) => {
                            result.extend(self.expand_directive(&directive, scope));
                        }
                        None => result.push(Block::CodeBlock(code_block)),
                    }
                }

                Block::BlockQuote(children) => {
                    result.push(Block::BlockQuote(self.resolve_blocks(children, scope)));
                }

                Block::List(mut list) => {
                    list.items = list
                        .items
                        .into_iter()
                        .map(|item| self.resolve_blocks(item, scope))
                        .collect();
                    result.push(Block::List(list));
                }

                other => result.push(other),
            }
        }

        result
    }

    fn expand_directive(&mut self, directive: &IncludeDirective, scope: &Scope) -> Vec<Block> {
        let shift = directive.shift.unwrap_or(if self.options.auto_shift {
            scope.last_heading_level
        } else {
            0
        });
        let format = directive
            .format
            .clone()
            .unwrap_or_else(|| self.options.default_format.clone());

        let mut result = Vec::new();
        for line in &directive.paths {
            let full_path = paths::normalize(&scope.read_dir.join(line));
            // The rewrite base is the directory segment as written in the
            // directive: each nesting level contributes only its own piece.
            let rewrite_dir = Path::new(line).parent().unwrap_or(Path::new(""));
            result.extend(self.include_file(&full_path, rewrite_dir, &format, shift));
        }
        result
    }

    fn include_file(
        &mut self,
        path: &Path,
        rewrite_dir: &Path,
        format: &str,
        shift: i64,
    ) -> Vec<Block> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) => {
                self.diagnostics.push(Warning::file_not_found(path, &error));
                return Vec::new();
            }
        };

        // Canonicalized so the same file reached through different relative
        // spellings still trips the cycle check.
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if self.options.detect_cycles && self.in_progress.contains(&key) {
            self.diagnostics.push(Warning::circular_include(path));
            return Vec::new();
        }

        let parsed = match self.registry.parse(&source, format) {
            Ok(parsed) => parsed,
            Err(error) => {
                self.diagnostics.push(Warning::parse_failure(path, error));
                return Vec::new();
            }
        };

        self.in_progress.push(key);
        let mut scope = Scope {
            read_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            last_heading_level: 0,
        };
        let mut blocks = self.resolve_blocks(parsed.blocks, &mut scope);
        self.in_progress.pop();

        blocks = shift::shift_headings(blocks, shift, &mut self.title);

        if self.options.update_paths {
            rewrite::rebase_resources(&mut blocks, rewrite_dir);
        }

        blocks
    }
}
