//! Demonstration report for the annotator.
//!
//! # Responsibility
//! - Own the fixed example batch and the printed report layout.
//! - Keep rendering separate from stdout so the layout is testable.

use note_annotator_core::{parse_notes, render_pretty, AnnotateResult, AnnotateService};
use std::io::{self, Write};

const BANNER: &str = "Example Note Processing for Home Note";
const SEPARATOR_WIDTH: usize = 50;
const CLOSING_LINES: &[&str] = &[
    "This demonstrates how notes can be enhanced with:",
    "- Word counting",
    "- Action item detection",
    "- Content analysis",
    "- And much more...",
];

/// Example batch shown by the demo, as raw JSON input.
pub fn example_input() -> String {
    serde_json::json!([
        {"id": "1", "content": "Buy groceries and clean the house"},
        {"id": "2", "content": "Meeting notes from today's discussion"},
        {"id": "3", "content": "TODO: Finish the project report by Friday"}
    ])
    .to_string()
}

/// Builds the full demo report, ending with a newline.
pub fn render_report(service: &AnnotateService, input: &str) -> AnnotateResult<String> {
    let original = parse_notes(input)?;
    let processed = service.annotate(&original);

    let mut lines = vec![
        BANNER.to_string(),
        "=".repeat(SEPARATOR_WIDTH),
        String::new(),
        "Original notes:".to_string(),
        render_pretty(&original)?,
        String::new(),
        "Processed notes:".to_string(),
        render_pretty(&processed)?,
        String::new(),
    ];
    lines.extend(CLOSING_LINES.iter().map(|line| line.to_string()));

    let mut report = lines.join("\n");
    report.push('\n');
    Ok(report)
}

/// Writes the report and flushes, surfacing closed-pipe errors.
pub fn write_report(out: &mut impl Write, report: &str) -> io::Result<()> {
    out.write_all(report.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::{example_input, render_report, write_report};
    use note_annotator_core::{AnnotateError, AnnotateService};
    use std::io::{self, Write};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_report_copies_text_verbatim() {
        let mut out = Vec::new();
        write_report(&mut out, "line\n").unwrap();
        assert_eq!(out, b"line\n");
    }

    #[test]
    fn write_report_returns_error_on_closed_output() {
        let err = write_report(&mut ClosedPipe, "report\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn report_has_banner_sections_and_bullets() {
        let report = render_report(&AnnotateService::new(), &example_input()).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Example Note Processing for Home Note");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Original notes:");
        assert_eq!(lines[4], "[");

        let processed_at = lines
            .iter()
            .position(|line| *line == "Processed notes:")
            .expect("processed section should exist");
        assert_eq!(lines[processed_at - 1], "");

        let bullets: Vec<&&str> = lines.iter().filter(|line| line.starts_with("- ")).collect();
        assert_eq!(bullets.len(), 4);
        assert_eq!(lines.last(), Some(&"- And much more..."));
    }

    #[test]
    fn report_shows_original_then_annotated_notes() {
        let report = render_report(&AnnotateService::new(), &example_input()).unwrap();
        let (original, processed) = report
            .split_once("Processed notes:")
            .expect("processed section should exist");

        assert!(!original.contains("word_count"));
        assert!(processed.contains("\"word_count\": 7"));
        assert!(processed.contains("\"is_action\": true"));
        assert_eq!(processed.matches("\"processed\": true").count(), 3);
    }

    #[test]
    fn report_fails_on_bad_input() {
        let err = render_report(&AnnotateService::new(), r#"[{"id": "1"}]"#).unwrap_err();
        assert!(matches!(err, AnnotateError::MissingField { .. }));
    }
}
