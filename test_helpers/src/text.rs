//! Text normalization helpers for rendered settings summaries.

const GLYPHS: [&str; 4] = ["├── ", "└── ", "|   ", "    "];

/// Strips the tree indentation and branch glyphs from a summary line.
#[must_use]
pub fn strip_tree(line: &str) -> &str {
    let mut rest = line;
    while let Some(stripped) = GLYPHS.iter().find_map(|glyph| rest.strip_prefix(glyph)) {
        rest = stripped;
    }
    rest
}

/// Returns every summary line with its tree prefix removed.
#[must_use]
pub fn summary_lines(summary: &str) -> Vec<&str> {
    summary.lines().map(strip_tree).collect()
}

/// Nesting depth of a summary line; the root is depth zero.
#[must_use]
pub fn depth(line: &str) -> usize {
    let mut depth = 0;
    let mut rest = line;
    while let Some(stripped) = GLYPHS.iter().find_map(|glyph| rest.strip_prefix(glyph)) {
        rest = stripped;
        depth += 1;
    }
    depth
}

/// Labels of the root's direct children, in rendered order.
#[must_use]
pub fn top_level_labels(summary: &str) -> Vec<&str> {
    summary
        .lines()
        .filter(|line| depth(line) == 1)
        .map(strip_tree)
        .collect()
}
