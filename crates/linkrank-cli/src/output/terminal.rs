//! Terminal output formatter

use super::Section;

pub fn format_sections(sections: &[Section<'_>]) -> String {
    let mut output = String::new();

    for section in sections {
        output.push_str(&section.title);
        output.push('\n');
        for (page, value) in &section.entries {
            output.push_str(&format!("  {}: {:.4}\n", page, value));
        }
    }

    output
}
