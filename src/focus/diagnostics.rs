//! Diagnostic sink
//!
//! Deserialization reports every dropped focus as one human-readable line. Callers choose
//! where those lines go: collect them in a `Vec<String>` or forward them to `tracing`.

/// Receives one line per dropped focus
pub trait DiagnosticSink {
    fn append_line(&mut self, line: &str);
}

impl DiagnosticSink for Vec<String> {
    fn append_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Forwards diagnostic lines to `tracing` at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn append_line(&mut self, line: &str) {
        tracing::warn!(target: "focus_tree::deserializer", "{}", line);
    }
}

/// Discards every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn append_line(&mut self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_lines() {
        let mut sink: Vec<String> = Vec::new();
        sink.append_line("focus 'A' dropped");
        sink.append_line("focus 'B' dropped");
        assert_eq!(sink, vec!["focus 'A' dropped", "focus 'B' dropped"]);
    }
}
