//! XML output formatter

use super::Section;

pub fn format_sections(sections: &[Section<'_>]) -> String {
    let mut output = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rankings>\n");

    for s in sections {
        output.push_str(&format!(
            "  <ranking method=\"{}\" title=\"{}\">\n",
            s.name,
            escape_xml(&s.title)
        ));
        for (page, rank) in &s.entries {
            output.push_str(&format!(
                "    <page name=\"{}\">{}</page>\n",
                escape_xml(page),
                rank
            ));
        }
        output.push_str("  </ranking>\n");
    }

    output.push_str("</rankings>\n");
    output
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
