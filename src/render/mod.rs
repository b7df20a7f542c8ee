//! HTML and SVG fragment rendering.
//!
//! Everything here is pure: classified data in, embeddable markup out.
//! Fragments are interpolated into page templates by the compositor.

mod bounty;
mod chart;
mod size;
mod table;

pub use bounty::{BountyIssue, render_bounty_cards, render_bounty_styles};
pub use chart::{LiquidityPoint, chart_placeholder, format_amount, render_liquidity_chart};
pub use size::format_file_size;
pub use table::{FRESHNESS_WINDOW_HOURS, render_cli_table, render_gui_table};
