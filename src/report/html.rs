use std::fmt::Write;

use crate::assets::ImageSlot;
use crate::pipeline::stage4_dashboard::Dashboard;
use crate::report::svg::{bar_chart, pie_chart};
use crate::report::{
    GENE_CHART_TITLE, HEADING, PAGE_TITLE, SPECIES_CHART_TITLE, SUBTITLE, escape_html,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Written to disk; the filter form is shown but disabled.
    Static,
    /// Served over HTTP; the filter form submits back to `/`.
    Served,
}

const STYLE: &str = "\
body{font-family:Arial,Helvetica,sans-serif;margin:0;color:#222;background:#fff;display:flex;}
.sidebar{width:240px;min-height:100vh;background:#f0f2f6;padding:20px;box-sizing:border-box;}
.sidebar h2{font-size:18px;margin:0 0 12px 0;}
.sidebar label{display:block;margin:4px 0;font-size:14px;}
.main{flex:1;padding:20px 32px;}
h1{margin:0 0 8px 0;font-size:28px;}
h2{margin:28px 0 10px 0;font-size:20px;}
.subtitle{color:#555;margin-bottom:16px;}
.table{border-collapse:collapse;width:100%;font-size:13px;}
.table th,.table td{border:1px solid #ddd;padding:6px 8px;text-align:left;}
.table th{background:#fafafa;}
.mono{font-family:monospace;}
.columns{display:flex;gap:24px;flex-wrap:wrap;}
.column{flex:1;min-width:320px;}
.warning{background:#fffbe6;border:1px solid #f0d000;color:#7a5d00;padding:10px 12px;border-radius:4px;}
.caption{color:#555;font-size:13px;text-align:center;margin-top:4px;}
.note{color:#777;font-size:12px;margin-top:10px;}
.empty{color:#888;font-style:italic;}
.count{color:#888;font-size:12px;}
img{max-width:100%;}
svg{background:#fafafa;border:1px solid #e5e5e5;max-width:100%;height:auto;}
";

pub fn render_html(dashboard: &Dashboard<'_>, target: RenderTarget) -> String {
    let mut html = String::with_capacity(32 * 1024);
    // fmt::Write on String cannot fail
    let _ = write_page(&mut html, dashboard, target);
    html
}

fn write_page(
    html: &mut String,
    dashboard: &Dashboard<'_>,
    target: RenderTarget,
) -> std::fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )?;
    writeln!(html, "<title>{}</title>", escape_html(PAGE_TITLE))?;
    writeln!(html, "<style>\n{STYLE}</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;

    write_sidebar(html, dashboard, target)?;

    writeln!(html, "<div class=\"main\">")?;
    writeln!(html, "<h1>{}</h1>", escape_html(HEADING))?;
    writeln!(html, "<div class=\"subtitle\">{}</div>", escape_html(SUBTITLE))?;

    write_table(html, dashboard)?;
    write_charts(html, dashboard)?;
    write_images(html, dashboard)?;

    writeln!(html, "</div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(())
}

fn write_sidebar(
    html: &mut String,
    dashboard: &Dashboard<'_>,
    target: RenderTarget,
) -> std::fmt::Result {
    let disabled = match target {
        RenderTarget::Static => " disabled",
        RenderTarget::Served => "",
    };
    writeln!(html, "<div class=\"sidebar\">")?;
    writeln!(html, "<h2>Filters</h2>")?;
    writeln!(html, "<form method=\"get\" action=\"/\">")?;
    writeln!(html, "<input type=\"hidden\" name=\"submitted\" value=\"1\"/>")?;
    writeln!(html, "<fieldset{disabled}>")?;
    writeln!(html, "<legend>Select Species to View</legend>")?;
    for species in &dashboard.species_options {
        let checked = if dashboard.is_selected(species) {
            " checked"
        } else {
            ""
        };
        let label = escape_html(species);
        let count = dashboard.species_count.get(species);
        writeln!(
            html,
            "<label><input type=\"checkbox\" name=\"species\" value=\"{label}\"{checked}/> {label} <span class=\"count\">({count})</span></label>"
        )?;
    }
    writeln!(html, "<button type=\"submit\">Apply</button>")?;
    writeln!(html, "</fieldset>")?;
    writeln!(html, "</form>")?;
    if target == RenderTarget::Static {
        writeln!(
            html,
            "<div class=\"note\">Static export. Run <code>edna-dashboard serve</code> to filter interactively.</div>"
        )?;
    }
    writeln!(html, "</div>")?;
    Ok(())
}

fn write_table(html: &mut String, dashboard: &Dashboard<'_>) -> std::fmt::Result {
    writeln!(html, "<h2>Predicted Species &amp; Annotations</h2>")?;
    writeln!(html, "<table class=\"table\">")?;
    writeln!(
        html,
        "<tr><th>SampleID</th><th>PredictedSpecies</th><th>eDNA_Sequence</th><th>Annotation</th></tr>"
    )?;
    for sample in &dashboard.rows {
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td class=\"mono\">{}</td><td>{}</td></tr>",
            escape_html(&sample.sample_id),
            escape_html(&sample.predicted_species),
            escape_html(&sample.sequence),
            escape_html(&sample.annotation)
        )?;
    }
    if dashboard.rows.is_empty() {
        writeln!(
            html,
            "<tr><td colspan=\"4\" class=\"empty\">No samples match the current selection.</td></tr>"
        )?;
    }
    writeln!(html, "</table>")?;
    Ok(())
}

fn write_charts(html: &mut String, dashboard: &Dashboard<'_>) -> std::fmt::Result {
    let bars: Vec<(&str, usize)> = dashboard
        .species_count
        .by_count_desc()
        .into_iter()
        .map(|e| (e.species.as_str(), e.count))
        .collect();
    let slices: Vec<(&str, usize)> = dashboard
        .gene_tally
        .entries()
        .iter()
        .map(|e| (e.tag.as_str(), e.count))
        .collect();

    writeln!(html, "<h2>Dashboard</h2>")?;
    writeln!(html, "<div class=\"columns\">")?;
    writeln!(
        html,
        "<div class=\"column\" id=\"species-chart\">{}</div>",
        bar_chart(SPECIES_CHART_TITLE, &bars)
    )?;
    writeln!(
        html,
        "<div class=\"column\" id=\"gene-chart\">{}</div>",
        pie_chart(GENE_CHART_TITLE, &slices)
    )?;
    writeln!(html, "</div>")?;
    Ok(())
}

fn write_images(html: &mut String, dashboard: &Dashboard<'_>) -> std::fmt::Result {
    writeln!(html, "<h2>System Architecture &amp; Dashboard Preview</h2>")?;
    writeln!(html, "<div class=\"columns\">")?;
    for panel in &dashboard.images {
        writeln!(html, "<div class=\"column\">")?;
        match &panel.slot {
            ImageSlot::Shown { href, .. } => {
                let caption = escape_html(panel.caption);
                writeln!(
                    html,
                    "<img src=\"{}\" alt=\"{caption}\"/><div class=\"caption\">{caption}</div>",
                    escape_html(href)
                )?;
            }
            ImageSlot::Warning { message } => {
                writeln!(html, "<div class=\"warning\">{}</div>", escape_html(message))?;
            }
        }
        writeln!(html, "</div>")?;
    }
    writeln!(html, "</div>")?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
