//! TypeScript import builder.

/// Builder for a single TypeScript named-import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports at once.
    pub fn named_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Build the import statement, without a trailing newline.
    pub fn build(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        if self.named.is_empty() {
            format!("import '{}';", self.from)
        } else {
            format!(
                "import {}{{ {} }} from '{}';",
                type_kw,
                self.named.join(", "),
                self.from
            )
        }
    }
}
