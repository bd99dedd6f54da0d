//! Display strings for links, approval marks and progress ratios

use crate::domain::OutputStyle;
use crate::rollup::Ratio;

/// Rendered in place of a ratio whose denominator is zero.
pub const NO_DATA: &str = "-";

pub const APPROVED_MARK: &str = "✓";

const BAR_WIDTH: usize = 10;

pub fn link(style: OutputStyle, url: &str, key: &str) -> String {
    match style {
        OutputStyle::Plain if url.is_empty() => key.to_string(),
        OutputStyle::Plain => url.to_string(),
        OutputStyle::Sheets => {
            format!("=HYPERLINK(\"{}\",\"{}\")", escape_formula(url), escape_formula(key))
        }
    }
}

pub fn mark(approved: bool) -> String {
    if approved {
        APPROVED_MARK.to_string()
    } else {
        String::new()
    }
}

pub fn progress(style: OutputStyle, ratio: &Ratio) -> String {
    let Some(fraction) = ratio.fraction() else {
        return NO_DATA.to_string();
    };

    match style {
        OutputStyle::Plain => {
            let filled = ((fraction * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
            format!(
                "[{}{}] {}/{}",
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH - filled),
                format_quantity(ratio.done),
                format_quantity(ratio.total)
            )
        }
        OutputStyle::Sheets => format!(
            "=SPARKLINE({},{{\"charttype\",\"bar\";\"max\",{}}})",
            format_quantity(ratio.done),
            format_quantity(ratio.total)
        ),
    }
}

/// Rounded to one decimal; whole numbers print without decimals.
pub fn format_quantity(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    match rounded.strip_suffix(".0") {
        Some(whole) if whole == "-0" => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

fn escape_formula(text: &str) -> String {
    text.replace('"', "\"\"")
}
