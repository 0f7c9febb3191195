//! CSV output formatter

use super::Section;

pub fn format_sections(sections: &[Section<'_>]) -> String {
    let mut output = String::from("method,page,rank\n");

    for s in sections {
        for (page, rank) in &s.entries {
            output.push_str(&format!("{},{},{}\n", s.name, escape_csv(page), rank));
        }
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
