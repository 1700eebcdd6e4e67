use std::f64::consts::PI;
use std::fmt::Write;

use crate::report::{NO_DATA, escape_html, format_percent, palette_color};

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 340.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 56.0;

fn open_svg(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" role=\"img\">"
    );
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"22\" text-anchor=\"middle\" font-size=\"15\" font-weight=\"bold\">{}</text>",
        WIDTH / 2.0,
        escape_html(title)
    );
}

fn placeholder(out: &mut String) {
    let _ = write!(
        out,
        "<text class=\"no-data\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"#888\" font-size=\"13\">{}</text>",
        WIDTH / 2.0,
        HEIGHT / 2.0,
        NO_DATA
    );
}

/// Vertical bar chart, one colored bar per category.
pub fn bar_chart(title: &str, bars: &[(&str, usize)]) -> String {
    let mut out = String::with_capacity(4096);
    open_svg(&mut out, title);

    let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0);
    if bars.is_empty() || max == 0 {
        placeholder(&mut out);
        out.push_str("</svg>");
        return out;
    }

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + plot_h;

    // integer ticks, at most ~5 of them
    let step = max.div_ceil(5).max(1);
    let mut tick = 0usize;
    while tick <= max {
        let y = base_y - plot_h * tick as f64 / max as f64;
        let _ = write!(
            out,
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#e5e5e5\"/>",
            MARGIN_LEFT + plot_w
        );
        let _ = write!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\">{tick}</text>",
            MARGIN_LEFT - 6.0,
            y + 4.0
        );
        tick += step;
    }
    let _ = write!(
        out,
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{base_y:.1}\" x2=\"{:.1}\" y2=\"{base_y:.1}\" stroke=\"#444\"/>",
        MARGIN_LEFT + plot_w
    );

    let slot = plot_w / bars.len() as f64;
    let bar_w = slot * 0.7;
    for (i, (label, value)) in bars.iter().enumerate() {
        let h = plot_h * *value as f64 / max as f64;
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
        let label = escape_html(label);
        let _ = write!(
            out,
            "<rect x=\"{x:.1}\" y=\"{:.1}\" width=\"{bar_w:.1}\" height=\"{h:.1}\" fill=\"{}\"><title>{label}: {value}</title></rect>",
            base_y - h,
            palette_color(i)
        );
        let _ = write!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\">{label}</text>",
            x + bar_w / 2.0,
            base_y + 16.0
        );
    }
    let _ = write!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\">Species</text>",
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 12.0
    );
    let _ = write!(
        out,
        "<text x=\"14\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" transform=\"rotate(-90 14 {:.1})\">Count</text>",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );
    out.push_str("</svg>");
    out
}

/// Pie chart with a legend. Zero-valued slices appear only in the legend.
pub fn pie_chart(title: &str, slices: &[(&str, usize)]) -> String {
    let mut out = String::with_capacity(4096);
    open_svg(&mut out, title);

    let total: usize = slices.iter().map(|(_, v)| *v).sum();
    if total == 0 {
        placeholder(&mut out);
        out.push_str("</svg>");
        return out;
    }

    let r = (HEIGHT - MARGIN_TOP - 24.0) / 2.0;
    let cx = MARGIN_LEFT + r;
    let cy = MARGIN_TOP + 12.0 + r;

    let mut start = -PI / 2.0;
    for (i, (label, value)) in slices.iter().enumerate() {
        if *value == 0 {
            continue;
        }
        let label = escape_html(label);
        let pct = format_percent(*value, total);
        let sweep = 2.0 * PI * *value as f64 / total as f64;
        if *value == total {
            let _ = write!(
                out,
                "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{r:.1}\" fill=\"{}\"><title>{label}: {value} ({pct})</title></circle>",
                palette_color(i)
            );
        } else {
            let end = start + sweep;
            let large = if sweep > PI { 1 } else { 0 };
            let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let _ = write!(
                out,
                "<path d=\"M{cx:.1},{cy:.1} L{x0:.2},{y0:.2} A{r:.1},{r:.1} 0 {large} 1 {x1:.2},{y1:.2} Z\" fill=\"{}\" stroke=\"#fff\"><title>{label}: {value} ({pct})</title></path>",
                palette_color(i)
            );
        }
        start += sweep;
    }

    let legend_x = cx + r + 32.0;
    for (i, (label, value)) in slices.iter().enumerate() {
        let y = MARGIN_TOP + 20.0 + 22.0 * i as f64;
        let _ = write!(
            out,
            "<rect x=\"{legend_x:.1}\" y=\"{:.1}\" width=\"12\" height=\"12\" fill=\"{}\"/>",
            y - 10.0,
            palette_color(i)
        );
        let _ = write!(
            out,
            "<text x=\"{:.1}\" y=\"{y:.1}\" font-size=\"12\">{} ({})</text>",
            legend_x + 18.0,
            escape_html(label),
            format_percent(*value, total)
        );
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/svg.rs"]
mod tests;
