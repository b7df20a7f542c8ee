//! Self-contained SVG line chart for the liquidity time series.

use chrono::NaiveDate;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 200;
const PADDING: f64 = 40.0;

const LABEL_ATTRS: &str = r##"fill="#666" font-size="12" font-family="system-ui, sans-serif""##;

/// One day of network liquidity, in BTC. The sequence handed to the
/// renderer is chronological (oldest first).
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Format a BTC amount with sensible precision: two decimals once the
/// value reaches 1, four below that.
pub fn format_amount(value: f64) -> String {
    if value >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.4}")
    }
}

/// Fixed-size stand-in graphic used when there is nothing to plot.
pub fn chart_placeholder(label: &str) -> String {
    format!(
        r##"<svg width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">
      <text x="{x}" y="{y}" text-anchor="middle" fill="#666">{label}</text>
    </svg>"##,
        x = WIDTH / 2,
        y = HEIGHT / 2,
    )
}

/// Render the series as an embeddable SVG fragment. An empty series
/// yields the "no data" placeholder; this function never fails.
pub fn render_liquidity_chart(points: &[LiquidityPoint]) -> String {
    if points.is_empty() {
        return chart_placeholder("No data available");
    }

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    // Degenerate flat series would otherwise divide by zero
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let inner_width = WIDTH as f64 - 2.0 * PADDING;
    let inner_height = HEIGHT as f64 - 2.0 * PADDING;
    let span = (points.len() - 1).max(1) as f64;

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PADDING + i as f64 * inner_width / span;
            let y = HEIGHT as f64 - PADDING - (point.value - min) / range * inner_height;
            (x, y)
        })
        .collect();

    let path: String = coords
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" L ");
    let path = format!("M {path}");

    let bottom = HEIGHT as f64 - PADDING;
    let (first_x, _) = coords[0];
    let (last_x, _) = coords[coords.len() - 1];
    let area = format!("{path} L {last_x},{bottom} L {first_x},{bottom} Z");

    let first_date = points[0].date.format("%b %-d");
    let last_date = points[points.len() - 1].date.format("%b %-d");

    format!(
        r##"<svg width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" style="max-width: 100%; height: auto;">
    <defs>
      <linearGradient id="areaGradient" x1="0%" y1="0%" x2="0%" y2="100%">
        <stop offset="0%" style="stop-color:#ff6b35;stop-opacity:0.3" />
        <stop offset="100%" style="stop-color:#ff6b35;stop-opacity:0.05" />
      </linearGradient>
    </defs>

    <rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="transparent" />

    <path d="{area}" fill="url(#areaGradient)" />

    <path d="{path}" fill="none" stroke="#ff6b35" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />

    <text x="{label_x}" y="{max_y}" text-anchor="end" {LABEL_ATTRS}>{max_label} BTC</text>
    <text x="{label_x}" y="{min_y}" text-anchor="end" {LABEL_ATTRS}>{min_label} BTC</text>

    <text x="{PADDING}" y="{date_y}" text-anchor="start" {LABEL_ATTRS}>{first_date}</text>
    <text x="{date_end_x}" y="{date_y}" text-anchor="end" {LABEL_ATTRS}>{last_date}</text>
  </svg>"##,
        label_x = PADDING - 10.0,
        max_y = PADDING + 5.0,
        min_y = bottom + 5.0,
        max_label = format_amount(max),
        min_label = format_amount(min),
        date_y = bottom + 20.0,
        date_end_x = WIDTH as f64 - PADDING,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, d).unwrap()
    }

    #[test]
    fn test_empty_series_renders_placeholder() {
        let svg = render_liquidity_chart(&[]);
        assert!(svg.contains("No data available"));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_single_point_does_not_divide_by_zero() {
        let svg = render_liquidity_chart(&[LiquidityPoint {
            date: day(1),
            value: 12.5,
        }]);

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        assert!(svg.contains("12.50 BTC"));
    }

    #[test]
    fn test_flat_series_uses_fallback_range() {
        let points: Vec<LiquidityPoint> = (1..=3)
            .map(|d| LiquidityPoint {
                date: day(d),
                value: 2.0,
            })
            .collect();

        let svg = render_liquidity_chart(&points);
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_axis_labels_at_extremes_only() {
        let points = vec![
            LiquidityPoint { date: day(1), value: 0.5 },
            LiquidityPoint { date: day(2), value: 4.0 },
            LiquidityPoint { date: day(3), value: 1.5 },
        ];

        let svg = render_liquidity_chart(&points);
        assert!(svg.contains("4.00 BTC"));
        assert!(svg.contains("0.5000 BTC"));
        assert!(svg.contains("Jul 1"));
        assert!(svg.contains("Jul 3"));
        // The middle date is not labelled
        assert!(!svg.contains("Jul 2"));
    }

    #[test]
    fn test_line_and_area_share_vertices() {
        let points = vec![
            LiquidityPoint { date: day(1), value: 1.0 },
            LiquidityPoint { date: day(2), value: 2.0 },
        ];

        let svg = render_liquidity_chart(&points);
        let line_start = svg.find(r#"fill="none""#).unwrap();
        let area_start = svg.find("areaGradient)").unwrap();
        assert!(area_start < line_start);
        assert!(svg.contains(" Z\" fill=\"url(#areaGradient)\""));
    }

    #[test]
    fn test_format_amount_precision() {
        assert_eq!(format_amount(12.3456), "12.35");
        assert_eq!(format_amount(1.0), "1.00");
        assert_eq!(format_amount(0.12345), "0.1235");
        assert_eq!(format_amount(0.0), "0.0000");
    }
}
