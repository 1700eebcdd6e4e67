use serde::Serialize;

use crate::pipeline::stage4_dashboard::Dashboard;

#[derive(Serialize)]
struct SummaryJson<'d, 'a> {
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    dashboard: &'d Dashboard<'a>,
    n_rows: usize,
}

pub fn render_summary_json(dashboard: &Dashboard<'_>) -> Result<String, serde_json::Error> {
    let summary = SummaryJson {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        dashboard,
        n_rows: dashboard.rows.len(),
    };
    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
