use crate::list::List;
use crate::parser::GoNode;

// ── Doc comment extraction ────────────────────────────────────────

/// Collect the lead comment block of a declaration, verbatim.
///
/// Walks backward through sibling `comment` nodes. The nearest comment must
/// end on the line directly above `node`; earlier comments join the block
/// while no blank line separates them. A comment that shares its line with
/// preceding code belongs to that code and is dropped.
pub(super) fn lead_comments(node: &GoNode<'_>, source: &str) -> List {
    let decl_line = node.start_pos().line();
    let mut top_line = decl_line;
    let mut block: Vec<(usize, String)> = Vec::new();

    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != "comment" {
            break;
        }
        let end_line = sibling.end_pos().line();
        let adjacent = if block.is_empty() {
            end_line + 1 == decl_line
        } else {
            end_line + 1 >= top_line
        };
        if !adjacent {
            break;
        }
        top_line = sibling.start_pos().line();
        block.push((
            sibling.range().start,
            sibling.text().trim_end_matches('\r').to_string(),
        ));
        current = sibling.prev();
    }

    if let Some(&(start, _)) = block.last() {
        if !starts_line(source, start) {
            block.pop();
        }
    }

    block.into_iter().rev().map(|(_, text)| text).collect()
}

/// `true` when only whitespace precedes byte `offset` on its line.
fn starts_line(source: &str, offset: usize) -> bool {
    let Some(before) = source.get(..offset) else {
        return false;
    };
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    before[line_start..].trim().is_empty()
}

// ── Node lookups ──────────────────────────────────────────────────

/// First child of the given kind, as text.
pub(super) fn child_text(node: &GoNode<'_>, kind: &str) -> Option<String> {
    node.children()
        .find(|c| c.kind().as_ref() == kind)
        .map(|n| n.text().to_string())
}
