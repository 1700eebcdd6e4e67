pub mod html;
pub mod json;
pub mod svg;
pub mod text;

pub const PAGE_TITLE: &str = "AI eDNA Dashboard";
pub const HEADING: &str = "AI-powered eDNA Biodiversity Dashboard";
pub const SUBTITLE: &str = "Analyze environmental DNA sequences and predict species with AI.";
pub const SPECIES_CHART_TITLE: &str = "Number of Samples per Species";
pub const GENE_CHART_TITLE: &str = "Gene Annotation Distribution";
pub const NO_DATA: &str = "No data for the current selection";

/// Qualitative palette cycled across chart categories.
const PALETTE: &[&str] = &[
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
