//! Plain-terminal rendering of a `DisplaySnapshot`.

use revenue_core::{engine::EngineState, snapshot::DisplaySnapshot, theme::Theme};
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

struct Palette {
    title:  &'static str,
    accent: &'static str,
    muted:  &'static str,
    rates:  [&'static str; 3],
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            title:  "\x1b[1;30m",
            accent: "\x1b[32m",
            muted:  "\x1b[90m",
            rates:  ["\x1b[34m", "\x1b[35m", "\x1b[33m"],
        },
        Theme::Dark => Palette {
            title:  "\x1b[1;97m",
            accent: "\x1b[92m",
            muted:  "\x1b[37m",
            rates:  ["\x1b[94m", "\x1b[95m", "\x1b[93m"],
        },
    }
}

/// Full screen: header, input, controls, earnings card, rate cards.
pub fn render(snap: &DisplaySnapshot) -> String {
    let p = palette(snap.theme);
    let mut out = String::new();

    let _ = writeln!(out, "{}Revenue Stream{RESET}  {}[{}]{RESET}", p.title, p.muted, snap.theme.as_str());

    let input = if snap.input.is_empty() { "10,00,000" } else { snap.input.as_str() };
    let lock = if snap.input_enabled { "" } else { " (locked)" };
    let _ = writeln!(out, "  Annual Revenue  ₹ {input}{}{lock}{RESET}", p.muted);

    let controls = match snap.state {
        EngineState::Running => "[p]ause  [r]eset",
        _ if snap.can_start  => "[s]tart",
        _                    => "(enter an amount to start)",
    };
    let _ = writeln!(out, "  {}{controls}  [t]heme  [q]uit{RESET}", p.muted);

    if let Some(earned) = &snap.earned_display {
        let live = if snap.live { format!("  {}● Live{RESET}", p.accent) } else { String::new() };
        let _ = writeln!(out, "  Earned So Far   {}{earned}{RESET}{live}", p.accent);
    }

    if let Some(rates) = &snap.rates {
        let [daily, hourly, minute] = p.rates;
        let _ = writeln!(
            out,
            "  {daily}Daily {}{RESET}   {hourly}Hourly {}{RESET}   {minute}Minute {}{RESET}",
            rates.daily, rates.hourly, rates.per_minute
        );
    }
    out
}

/// One-line earnings update for tick redraws.
pub fn render_status(snap: &DisplaySnapshot) -> String {
    let p = palette(snap.theme);
    let earned = snap.earned_display.as_deref().unwrap_or("-");
    format!("\r\x1b[2K  {}{earned}{RESET} {}(tick {}){RESET}", p.accent, p.muted, snap.ticks)
}
