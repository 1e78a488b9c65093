/// Minimal report document helpers.
///
/// Every tool answers with one text document: an `A:` answer line, `N:` notes, `R:` candidate
/// headers, and verbatim `S:`-introduced script blocks.
pub(crate) struct ReportBuilder {
    out: String,
}

impl ReportBuilder {
    const QUOTE_PREFIX: &'static str = " ";

    #[must_use]
    pub(crate) fn new() -> Self {
        let mut out = String::new();
        out.push_str("[REPORT]\n");
        Self { out }
    }

    #[must_use]
    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn push_blank(&mut self) {
        if !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.out.push('\n');
    }

    pub(crate) fn push_answer(&mut self, text: &str) {
        self.push_line(&format!("A: {text}"));
    }

    pub(crate) fn push_note(&mut self, text: &str) {
        self.push_line(&format!("N: {text}"));
    }

    pub(crate) fn push_candidate_header(&mut self, rank: usize, score: u32, label: &str) {
        self.push_line(&format!("R: #{rank} score={score} {label}"));
    }

    /// Push a script block under an `S:` marker line.
    pub(crate) fn push_script(&mut self, label: &str, script: &str) {
        self.push_blank();
        self.push_line(&format!("S: {label}"));
        self.push_block_smart(script);
    }

    fn line_needs_quoting(line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.starts_with("[LEGEND]")
            || trimmed.starts_with("[REPORT]")
            || trimmed.starts_with("A:")
            || trimmed.starts_with("N:")
            || trimmed.starts_with("R:")
            || trimmed.starts_with("S:")
    }

    /// Push a multi-line block, quoting only the lines that would collide with report markers.
    pub(crate) fn push_block_smart(&mut self, block: &str) {
        for line in block.lines() {
            if Self::line_needs_quoting(line) {
                self.out.push_str(Self::QUOTE_PREFIX);
            }
            self.out.push_str(line);
            self.out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_starts_with_marker_and_keeps_order() {
        let mut doc = ReportBuilder::new();
        doc.push_answer("done");
        doc.push_note("one");
        doc.push_candidate_header(1, 45, "TxSts");
        assert_eq!(
            doc.finish(),
            "[REPORT]\nA: done\nN: one\nR: #1 score=45 TxSts\n"
        );
    }

    #[test]
    fn script_lines_colliding_with_markers_are_quoted() {
        let mut doc = ReportBuilder::new();
        doc.push_script("link", "-- header\nN: not a note\nEND");
        let text = doc.finish();
        assert!(text.contains("\nS: link\n-- header\n N: not a note\nEND\n"));
    }
}
