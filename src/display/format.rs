//! Unit scaling and indicator selection.
//!
//! Everything here is pure so it can be tested without a terminal.

use crate::display::style::Style;
use crate::metrics::data::ChargeState;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Milliwatts as a display string.
///
/// Below 1000 the value stays in milliwatts, right-aligned to four digits;
/// from 1000 up it switches to watts with two decimals.
pub fn format_power(milliwatts: u32) -> String {
    if milliwatts >= 1000 {
        format!("{:.2}W", f64::from(milliwatts) / 1000.0)
    } else {
        format!("{:>4}mW", milliwatts)
    }
}

/// Color class for a battery level.
///
/// Charging wins regardless of level; 20% and below is critical.
pub fn battery_color(percentage: u32, is_charging: bool) -> Style {
    if is_charging {
        Style::Cyan
    } else if percentage > 50 {
        Style::Green
    } else if percentage > 20 {
        Style::Yellow
    } else {
        Style::Red
    }
}

/// Number of filled cells in a bar of `width` cells: floor(p / 100 * width).
///
/// Levels above 100 fill the whole bar.
pub fn filled_cells(percentage: u32, width: usize) -> usize {
    let filled = u64::from(percentage) * width as u64 / 100;
    usize::try_from(filled).map_or(width, |cells| cells.min(width))
}

/// Fixed-width charge bar.
pub fn battery_bar(percentage: u32, width: usize) -> String {
    let filled = filled_cells(percentage, width);
    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

/// Health label color: green for "Normal", yellow for anything else.
pub fn health_color(condition: &str) -> Style {
    if condition == "Normal" {
        Style::Green
    } else {
        Style::Yellow
    }
}

/// Icon and label for the full layout.
pub fn status_label(state: ChargeState) -> &'static str {
    match state {
        ChargeState::FullyCharged => "⚡ Fully Charged",
        ChargeState::Charging => "🔌 Charging",
        ChargeState::OnBattery => "🔋 On Battery",
    }
}

/// Single glyph for the compact layout. A full battery on adapter power
/// shows the charging glyph even when it is not drawing charge.
pub fn status_icon(state: ChargeState) -> &'static str {
    match state {
        ChargeState::FullyCharged | ChargeState::Charging => "⚡",
        ChargeState::OnBattery => "🔋",
    }
}

/// Plain word for the snapshot layout.
pub fn status_word(state: ChargeState) -> &'static str {
    match state {
        ChargeState::FullyCharged => "Fully Charged",
        ChargeState::Charging => "Charging",
        ChargeState::OnBattery => "Discharging",
    }
}
