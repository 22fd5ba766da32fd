//! JSDoc block builder.

/// Builder for a `/** ... */` documentation block.
///
/// Multi-line text keeps its line structure: non-blank lines are trimmed and
/// prefixed, blank lines become bare continuation lines.
#[derive(Debug, Clone, Default)]
pub struct DocBlock {
    lines: Vec<String>,
}

impl DocBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Append a bare continuation line.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Append free text, preserving its internal line breaks.
    pub fn text(mut self, text: &str) -> Self {
        for line in text.lines() {
            self.lines.push(line.trim().to_string());
        }
        self
    }

    /// Build the block, without a trailing newline.
    pub fn build(&self) -> String {
        let mut out = String::from("/**\n");
        for line in &self.lines {
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(" */");
        out
    }
}
