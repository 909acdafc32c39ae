//! Text builder — accumulates output lines and produces the final sheet.

pub(super) struct TextBuilder {
    lines: Vec<String>,
}

impl TextBuilder {
    pub(super) fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append one line; trailing whitespace is dropped.
    pub(super) fn line(&mut self, text: &str) {
        self.lines.push(text.trim_end().to_string());
    }

    pub(super) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub(super) fn build(self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
