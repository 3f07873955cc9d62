//! Tree-shaped summaries of settings.
//!
//! Each setting group renders itself as a [`Node`]; the aggregate stitches
//! those nodes under a single root label. Rendering is purely presentational
//! and never affects validation.
//!
//! ```
//! use vpn_settings::Node;
//!
//! let mut dns = Node::new("DNS settings:");
//! dns.line("Enabled: yes");
//! let mut root = Node::new("Settings summary:");
//! root.append(dns);
//! assert_eq!(
//!     root.to_string(),
//!     "Settings summary:\n└── DNS settings:\n    └── Enabled: yes"
//! );
//! ```

use std::fmt;

/// Labelled node carrying child nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    /// Create a node without children.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append `child` beneath this node.
    pub fn append(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Append a node labelled `label`, filled in by `build`.
    pub fn child(&mut self, label: impl Into<String>, build: impl FnOnce(&mut Self)) -> &mut Self {
        let mut child = Self::new(label);
        build(&mut child);
        self.append(child)
    }

    /// Append a leaf node holding `text`.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(Self::new(text))
    }

    /// The node's own label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Child nodes in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    fn write_children(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        let count = self.children.len();
        for (index, child) in self.children.iter().enumerate() {
            let (branch, indent) = if index + 1 == count {
                ("└── ", "    ")
            } else {
                ("├── ", "|   ")
            };
            write!(f, "\n{prefix}{branch}{}", child.label)?;
            child.write_children(f, &format!("{prefix}{indent}"))?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        self.write_children(f, "")
    }
}

/// Render a boolean as `yes` or `no`.
#[must_use]
pub const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Render a secret without revealing it.
#[must_use]
pub fn obfuscate(secret: Option<&str>) -> &'static str {
    match secret {
        Some(value) if !value.is_empty() => "[set]",
        _ => "[not set]",
    }
}

/// Render a list as comma-separated values, or `[not set]` when empty.
#[must_use]
pub fn list_or_unset<T: fmt::Display>(values: &[T]) -> String {
    if values.is_empty() {
        return String::from("[not set]");
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
