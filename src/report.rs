//! Plain-text rendering of resort conditions
//!
//! Formats a mapped `Resort` into the report printed on stdout. All
//! functions build strings so the layout is unit-testable without
//! touching the terminal.

use crate::data::{Resort, SnowReport, Trail, WeatherReport};

/// Renders the full conditions report for a resort
pub fn render(resort: &Resort) -> String {
    let mut out = String::new();

    out.push_str(&header(resort));
    out.push('\n');

    out.push_str("Weather\n");
    out.push_str(&weather_line("Today, morning   ", &resort.weather_today_morning));
    out.push_str(&weather_line("Today, afternoon ", &resort.weather_today_afternoon));
    out.push_str(&weather_line("Tomorrow, morning", &resort.weather_tomorrow_morning));
    out.push_str(&weather_line(
        "Tomorrow, afternoon",
        &resort.weather_tomorrow_afternoon,
    ));
    out.push('\n');

    out.push_str("Snow\n");
    out.push_str(&snow_line("Today   ", &resort.snow_today));
    out.push_str(&snow_line("Tomorrow", &resort.snow_tomorrow));
    out.push('\n');

    out.push_str(&format!("Trails ({})\n", resort.trails.len()));
    for trail in &resort.trails {
        out.push_str(&trail_line(trail));
    }

    out
}

/// Header with name, altitude span, and season dates
fn header(resort: &Resort) -> String {
    let mut line = if resort.name.is_empty() {
        "Unnamed resort".to_string()
    } else {
        resort.name.clone()
    };
    if resort.altitude_low != 0 || resort.altitude_high != 0 {
        line.push_str(&format!(
            " ({} m to {} m)",
            resort.altitude_low, resort.altitude_high
        ));
    }
    line.push('\n');
    if !resort.opening.is_empty() || !resort.closing.is_empty() {
        line.push_str(&format!("Season: {} to {}\n", resort.opening, resort.closing));
    }
    line
}

/// Substitutes a dash for fields the feed left empty
fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// One half-day weather line
fn weather_line(label: &str, weather: &WeatherReport) -> String {
    format!(
        "  {}  {}  {}°C to {}°C  wind: {}\n",
        label,
        or_dash(&weather.conditions),
        weather.temp_min,
        weather.temp_max,
        or_dash(&weather.wind),
    )
}

/// One day's snow summary line
fn snow_line(label: &str, snow: &SnowReport) -> String {
    format!(
        "  {}  depth {} cm / {} cm  fresh {} cm / {} cm  avalanche risk: {}\n",
        label,
        snow.depth_low,
        snow.depth_high,
        snow.fresh_low,
        snow.fresh_high,
        or_dash(&snow.avalanche_risk),
    )
}

/// One trail status line
fn trail_line(trail: &Trail) -> String {
    let mut line = format!(
        "  {}  {} km  {}",
        or_dash(&trail.name),
        trail.km_total,
        or_dash(&trail.status),
    );
    if !trail.difficulty.is_empty() {
        line.push_str(&format!("  [{}]", trail.difficulty));
    }
    if !trail.comment.is_empty() {
        line.push_str(&format!("  {}", trail.comment));
    }
    line.push('\n');
    line
}
