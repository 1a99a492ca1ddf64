// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the offerscope CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `OFFERSCOPE_THEME` when set, then `COLORFGBG`, then defaults to dark.
//! `NO_COLOR` and non-TTY stdout turn styling off entirely, so piped output
//! is plain text.

use offerscope::{CatalogPage, Facets, Offer, ScoreBreakdown};
use std::io::IsTerminal;
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();
static USE_COLORS: OnceLock<bool> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("OFFERSCOPE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": colors 0-6 and 8 are dark backgrounds
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Styling on? Respects `NO_COLOR` and only styles a terminal.
pub fn use_colors() -> bool {
    *USE_COLORS.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Apply theme color with optional modifiers, or nothing when styling is off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Cut plain text to `max` chars, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    section_line('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    section_line('├', '┤', label);
}

fn section_line(left: char, right: char, label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border(&left.to_string()),
        label_part,
        border(&format!("{}{}", "─".repeat(remaining), right))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score, right-aligned.
pub fn score_value(score: u32) -> String {
    let text = format!("{:>5}", score);
    let color: fn() -> String = if score >= 100 {
        BRIGHT_GREEN
    } else if score >= 50 {
        GREEN
    } else if score >= 20 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

fn featured_badge(offer: &Offer) -> String {
    if offer.is_featured {
        themed(MAGENTA, &[BOLD], "★")
    } else {
        " ".to_string()
    }
}

fn category_label(offer: &Offer) -> String {
    match (offer.category_main.as_deref(), offer.category_sub.as_deref()) {
        (Some(main), Some(sub)) => format!("{} › {}", main, sub),
        (Some(main), None) => main.to_string(),
        (None, _) => String::new(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Render a catalog page as a box with one row per offer.
pub fn print_page(page: &CatalogPage<'_>) {
    let header = format!(
        "RESULTS {} of {} · page {}/{}",
        page.items.len(),
        page.total_results,
        page.view.page,
        page.total_pages
    );
    section_top(&header);

    if page.items.is_empty() {
        row(&themed(GRAY, &[DIM], "  no offers match this view"));
    }
    for offer in &page.items {
        let id = themed(GRAY, &[], &pad_left(&offer.id.to_string(), 5));
        let name = themed(BLUE, &[BOLD], &truncate(&offer.name, 30));
        let category = themed(GRAY, &[], &truncate(&category_label(offer), 34));
        row(&format!(
            " {} {} {} {}",
            id,
            featured_badge(offer),
            pad_right(&name, 30),
            category
        ));
    }

    let canonical = page.canonical_query();
    section_mid("VIEW");
    let shown = if canonical.is_empty() { "(defaults)".to_string() } else { format!("?{}", canonical) };
    row(&format!(" {}", truncate(&shown, BOX_WIDTH - 2)));
    section_bot();
}

/// Render score breakdowns, one row per offer.
pub fn print_breakdowns(query: &str, rows: &[(&Offer, ScoreBreakdown)]) {
    section_top(&format!("EXPLAIN \"{}\"", truncate(query, 40)));
    row(&themed(
        GRAY,
        &[DIM],
        " total  name offer  cat   sub  tags  desc  offer",
    ));
    for (offer, breakdown) in rows {
        row(&format!(
            " {} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}  {}",
            score_value(breakdown.total()),
            breakdown.name,
            breakdown.offer,
            breakdown.category,
            breakdown.subcategory,
            breakdown.tags,
            breakdown.description,
            truncate(&offer.name, 30)
        ));
    }
    section_bot();
}

pub fn print_facets(facets: &Facets) {
    section_top("SUBCATEGORIES");
    print_list(&facets.subcategories);
    section_mid("TAGS");
    print_list(&facets.tags);
    section_bot();
}

fn print_list(values: &[String]) {
    if values.is_empty() {
        row(&themed(GRAY, &[DIM], "  (none)"));
    }
    for value in values {
        row(&format!("  {}", truncate(value, BOX_WIDTH - 4)));
    }
}
