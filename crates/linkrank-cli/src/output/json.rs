//! JSON output formatter

use super::Section;

pub fn format_sections(sections: &[Section<'_>]) -> String {
    let output: Vec<serde_json::Value> = sections
        .iter()
        .map(|s| {
            let mut value = serde_json::json!({
                "method": s.name,
                "title": s.title,
                "ranks": s.entries.iter().map(|(page, rank)| serde_json::json!({
                    "page": page,
                    "rank": rank,
                })).collect::<Vec<_>>(),
            });
            if let Some(samples) = s.samples {
                value["samples"] = samples.into();
            }
            if let Some(iterations) = s.iterations {
                value["iterations"] = iterations.into();
            }
            value
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}
