//! ast-grep wrapper: Go file detection, parsing, and rejection of trees with
//! syntax errors.

use std::path::Path;
use std::sync::Arc;

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;

/// The concrete AST tree type held by [`ParsedFile`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// A node of a parsed Go file.
pub type GoNode<'r> = Node<'r, StrDoc<SupportLang>>;

/// Returns `true` when `path` has the `.go` extension.
///
/// The match is case-sensitive, like the Go toolchain: `main.GO` and
/// `go.mod` are not Go source files.
#[must_use]
pub fn is_go_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().extension().is_some_and(|ext| ext == "go")
}

/// A syntactically valid Go file together with its source text.
pub struct ParsedFile {
    source: Arc<str>,
    tree: AstTree,
}

impl ParsedFile {
    /// Parse Go source.
    ///
    /// tree-sitter recovers from bad input, so the tree is checked for
    /// `ERROR` and missing nodes afterwards.
    ///
    /// # Errors
    /// Returns `ParserError::Syntax` for the first offending node, or when
    /// the file has no `package` clause.
    pub fn parse(source: &str) -> Result<Self, ParserError> {
        let tree = SupportLang::Go.ast_grep(source);
        check_syntax(&tree.root())?;
        Ok(Self {
            source: Arc::from(source),
            tree,
        })
    }

    #[must_use]
    pub fn root(&self) -> GoNode<'_> {
        self.tree.root()
    }

    /// Shared source buffer. Byte ranges of nodes index into it.
    #[must_use]
    pub const fn source(&self) -> &Arc<str> {
        &self.source
    }
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("len", &self.source.len())
            .finish_non_exhaustive()
    }
}

fn check_syntax(root: &GoNode<'_>) -> Result<(), ParserError> {
    let mut stack: Vec<GoNode<'_>> = Vec::new();
    if root.kind().as_ref() == "ERROR" {
        return Err(ParserError::Syntax {
            line: 1,
            message: "source is not a Go file".to_string(),
        });
    }
    stack.extend(root.children().collect::<Vec<_>>().into_iter().rev());
    while let Some(node) = stack.pop() {
        if node.kind().as_ref() == "ERROR" {
            return Err(ParserError::Syntax {
                line: node.start_pos().line() + 1,
                message: format!("unexpected `{}`", snippet(&node.text())),
            });
        }
        if node.is_missing() {
            return Err(ParserError::Syntax {
                line: node.start_pos().line() + 1,
                message: format!("missing `{}`", node.kind()),
            });
        }
        // Reversed so the earliest node in the file is reported first.
        stack.extend(node.children().collect::<Vec<_>>().into_iter().rev());
    }

    if !root
        .children()
        .any(|c| c.kind().as_ref() == "package_clause")
    {
        return Err(ParserError::Syntax {
            line: 1,
            message: "expected 'package' clause".to_string(),
        });
    }
    Ok(())
}

/// First line of `text`, capped at 40 chars.
fn snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default().trim();
    line.chars().take(40).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_file() {
        let source = "package main\n\ntype A struct{}\n";
        let parsed = ParsedFile::parse(source).expect("valid go");
        assert_eq!(parsed.root().kind().as_ref(), "source_file");
        assert_eq!(parsed.source().as_ref(), source);
    }

    #[test]
    fn parse_reports_error_line() {
        let source = "package main\n\ntype A struct {\n\tX int\n}\n\nfunc main() {\n\tx := \n}\n";
        let err = ParsedFile::parse(source).expect_err("broken go");
        match err {
            ParserError::Syntax { line, .. } => assert!(line >= 7, "line: {line}"),
            ParserError::Io(e) => panic!("unexpected io error: {e}"),
        }
    }

    #[test]
    fn parse_requires_package_clause() {
        let err = ParsedFile::parse("type A struct{}\n").expect_err("no package");
        assert!(err.to_string().contains("package"), "error: {err}");
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(ParsedFile::parse("").is_err());
    }

    #[test]
    fn go_extension_is_detected() {
        assert!(is_go_file("main.go"));
        assert!(is_go_file("pkg/server/handler_test.go"));
        assert!(is_go_file(std::path::PathBuf::from("/tmp/x.go")));
    }

    #[test]
    fn other_paths_are_not_go_files() {
        assert!(!is_go_file("main.GO"));
        assert!(!is_go_file("go.mod"));
        assert!(!is_go_file("Makefile"));
        assert!(!is_go_file(".go"));
        assert!(!is_go_file("main.go.txt"));
    }

    #[test]
    fn snippet_takes_first_line() {
        assert_eq!(snippet("  foo bar\nbaz"), "foo bar");
        assert_eq!(snippet(""), "");
    }
}
