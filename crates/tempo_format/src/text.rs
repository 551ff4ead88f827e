//! Line accumulator used by every record formatter.

/// Ordered output lines of one rendered record, joined with `\n` at the end.
#[derive(Debug, Default)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.extend(lines);
    }

    /// Appends `heading:`, the body and a blank line. Appends nothing when
    /// the body is empty.
    pub fn section(&mut self, heading: &str, body: Vec<String>) {
        if body.is_empty() {
            return;
        }
        self.lines.push(format!("{heading}:"));
        self.lines.extend(body);
        self.blank();
    }

    /// Appends pre-built lines followed by a blank line, if there are any.
    pub fn block(&mut self, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        self.lines.extend(lines);
        self.blank();
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// `"{label}: a / b / c{suffix}"`, or `None` when no part is present.
pub fn joined(label: &str, parts: &[Option<String>], suffix: &str) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    if present.is_empty() {
        return None;
    }
    Some(format!("{label}: {}{suffix}", present.join(" / ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_adds_nothing() {
        let mut text = TextBlock::new();
        text.section("Links", Vec::new());
        text.block(Vec::new());
        assert_eq!(text.finish(), "");
    }

    #[test]
    fn section_adds_heading_body_and_spacer() {
        let mut text = TextBlock::new();
        text.line("Top");
        text.section("Links", vec!["  Website: x".into()]);
        assert_eq!(text.finish(), "Top\nLinks:\n  Website: x\n");
    }

    #[test]
    fn joined_skips_missing_parts() {
        let parts = [Some("Avg 200W".to_string()), None, Some("Max 400W".to_string())];
        assert_eq!(
            joined("Power", &parts, "").as_deref(),
            Some("Power: Avg 200W / Max 400W")
        );
        assert_eq!(joined("HR", &[None, None], " bpm"), None);
    }
}
