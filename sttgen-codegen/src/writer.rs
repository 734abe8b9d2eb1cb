//! Line-oriented text builder with tab indentation.

#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current depth. Empty lines stay empty.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push('\t');
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Writes a Doxygen `/*! ... */` block.
    pub fn doc<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line("/*!");
        for text in lines {
            let text = text.as_ref();
            if text.is_empty() {
                self.line(" *");
            } else {
                self.line(format!(" * {text}"));
            }
        }
        self.line(" */")
    }

    /// Writes a plain `/* ... */` block.
    pub fn comment<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line("/*");
        for text in lines {
            self.line(format!(" * {}", text.as_ref()));
        }
        self.line(" */")
    }

    /// Opens a `{` block and indents.
    pub fn open(&mut self, head: impl AsRef<str>) -> &mut Self {
        self.line(head).line("{").indent()
    }

    /// Dedents and closes a block with `tail` (`}` or `};`).
    pub fn close(&mut self, tail: &str) -> &mut Self {
        self.dedent().line(tail)
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
