//! Markdown output formatter

use super::Section;

pub fn format_sections(sections: &[Section<'_>]) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    for s in sections {
        output.push_str(&format!("## {}\n\n", s.title));
        if s.entries.is_empty() {
            output.push_str("*No pages*\n\n");
            continue;
        }
        output.push_str("| Page | Rank |\n|------|------|\n");
        for (page, rank) in &s.entries {
            output.push_str(&format!("| `{}` | {:.4} |\n", page, rank));
        }
        output.push('\n');
    }

    output
}
