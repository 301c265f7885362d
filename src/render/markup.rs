//! Result markup
//!
//! Turns a summary record into the content of the result slot.

use super::summary::SummaryRecord;
use crate::form::Field;

pub const SUCCESS_BANNER: &str = "Form submitted successfully!";
pub const SUMMARY_HEADING: &str = "Submitted Data";

const TH_CLASS: &str = "border px-4 py-2 text-left";
const TD_CLASS: &str = "border px-4 py-2";

/// HTML banner, heading and 8-row table.
///
/// Values are already escaped by [`SummaryRecord`] and are inserted verbatim.
pub fn render_html(summary: &SummaryRecord) -> String {
    let mut html = format!(
        "<div class=\"text-green-700 font-semibold mb-2\">{}</div>\n\
         <h2 class=\"text-2xl font-bold mb-4\">{}</h2>\n",
        SUCCESS_BANNER, SUMMARY_HEADING
    );
    html.push_str("<table class=\"min-w-full bg-white border border-gray-300 rounded\">\n");
    html.push_str("  <tbody>\n");

    for (field, value) in summary.rows() {
        let td_class = if field.preserves_whitespace() {
            format!("{} whitespace-pre-line", TD_CLASS)
        } else {
            TD_CLASS.to_string()
        };
        html.push_str(&format!(
            "    <tr><th class=\"{}\">{}</th><td class=\"{}\">{}</td></tr>\n",
            TH_CLASS,
            field.label(),
            td_class,
            value
        ));
    }

    html.push_str("  </tbody>\n");
    html.push_str("</table>\n");
    html
}

/// Plain-text table for terminals.
///
/// Continuation lines of multi-line values are indented under the value
/// column so the address keeps its line breaks.
pub fn render_text(summary: &SummaryRecord) -> String {
    let width = Field::ALL
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or(0);
    let indent = " ".repeat(width + 2);

    let mut text = format!("{}\n{}\n", SUCCESS_BANNER, SUMMARY_HEADING);

    for (field, value) in summary.rows() {
        let mut lines = value.lines();
        let first = lines.next().unwrap_or("");
        text.push_str(&format!("{:<width$}  {}\n", field.label(), first, width = width));
        for line in lines {
            text.push_str(&format!("{}{}\n", indent, line));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormInput;
    use crate::validation::accept;

    fn summary() -> SummaryRecord {
        SummaryRecord::from_accepted(
            accept(FormInput {
                name: "<b>X</b>".into(),
                age: "30".into(),
                gender: "F".into(),
                country: "US".into(),
                tech_stack: vec!["Go".into(), "Rust".into()],
                address: "1 St\nSpringfield".into(),
                telephone: "5551234567".into(),
                email: "a@b.com".into(),
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_html_contains_every_row() {
        let html = render_html(&summary());

        assert!(html.contains(SUCCESS_BANNER));
        assert_eq!(html.matches("<tr>").count(), 8);
        assert!(html.contains(
            "<th class=\"border px-4 py-2 text-left\">Age</th><td class=\"border px-4 py-2\">30</td>"
        ));
        assert!(html.contains(">&lt;b&gt;X&lt;/b&gt;</td>"));
        assert!(html.contains(">Go, Rust</td>"));
    }

    #[test]
    fn test_html_opens_with_banner_and_heading() {
        let html = render_html(&summary());
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(
            lines[0],
            "<div class=\"text-green-700 font-semibold mb-2\">Form submitted successfully!</div>"
        );
        assert_eq!(lines[1], "<h2 class=\"text-2xl font-bold mb-4\">Submitted Data</h2>");
        assert!(html.ends_with("  </tbody>\n</table>\n"));
    }

    #[test]
    fn test_html_address_preserves_whitespace() {
        let html = render_html(&summary());

        assert!(html.contains(
            "<td class=\"border px-4 py-2 whitespace-pre-line\">1 St\nSpringfield</td>"
        ));
        assert_eq!(html.matches("whitespace-pre-line").count(), 1);
    }

    #[test]
    fn test_text_table_layout() {
        let text = render_text(&summary());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], SUCCESS_BANNER);
        assert_eq!(lines[1], SUMMARY_HEADING);
        assert_eq!(lines[2], "Name                 &lt;b&gt;X&lt;/b&gt;");
        assert_eq!(lines[7], "Address              1 St");
        assert_eq!(lines[8], "                     Springfield");
        assert_eq!(lines.len(), 11);
    }
}
