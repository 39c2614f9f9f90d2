//! Mutable state threaded through a single conversion pass.

/// Output buffer plus the span bookkeeping of one conversion.
///
/// `open_spans` always equals the number of `<span` tags written minus the
/// number of `</span>` tags written.
#[derive(Debug, Default)]
pub struct RenderState {
    output: String,
    open_spans: usize,
    opened_total: usize,
    pending_classes: Vec<&'static str>,
    pending_styles: Vec<String>,
}

impl RenderState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn open_spans(&self) -> usize {
        self.open_spans
    }

    /// Number of spans opened over the whole pass.
    pub fn opened_total(&self) -> usize {
        self.opened_total
    }

    pub fn push_class(&mut self, class: &'static str) {
        self.pending_classes.push(class);
    }

    pub fn push_style(&mut self, declaration: String) {
        self.pending_styles.push(declaration);
    }

    fn has_pending(&self) -> bool {
        !self.pending_classes.is_empty() || !self.pending_styles.is_empty()
    }

    /// Open a span carrying everything accumulated since the last flush.
    ///
    /// Does nothing when no class or style is pending.
    pub fn flush_pending(&mut self) {
        if !self.has_pending() {
            return;
        }

        self.output.push_str("<span class=\"");
        self.output.push_str(&self.pending_classes.join(" "));
        self.output.push_str("\" style=\"");
        self.output.push_str(&self.pending_styles.join(";"));
        self.output.push_str("\">");

        self.pending_classes.clear();
        self.pending_styles.clear();
        self.open_spans += 1;
        self.opened_total += 1;
    }

    /// Append a literal character, opening a pending span first.
    ///
    /// Spaces become `&nbsp;`; nothing else is escaped.
    pub fn push_char(&mut self, c: char) {
        self.flush_pending();
        if c == ' ' {
            self.output.push_str("&nbsp;");
        } else {
            self.output.push(c);
        }
    }

    /// Close the innermost open span, if any.
    pub fn close_one(&mut self) {
        if self.open_spans > 0 {
            self.output.push_str("</span>");
            self.open_spans -= 1;
        }
    }

    /// Close every span still open.
    pub fn close_all(&mut self) {
        while self.open_spans > 0 {
            self.close_one();
        }
    }

    /// Rewrite the buffer written so far.
    pub fn rewrite_output(&mut self, rewrite: impl FnOnce(String) -> String) {
        let output = std::mem::take(&mut self.output);
        self.output = rewrite(output);
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

#[cfg(test)]
impl RenderState {
    pub(crate) fn output(&self) -> &str {
        &self.output
    }

    pub(crate) fn pending_classes(&self) -> &[&'static str] {
        &self.pending_classes
    }

    pub(crate) fn pending_styles(&self) -> &[String] {
        &self.pending_styles
    }
}
