// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bigrep CLI.
//!
//! OneDark colors for dark terminals, One Light for light ones. Detection tries
//! `BIGREP_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR` and
//! non-TTY stdout turn color off entirely, so piped output is plain text and
//! safe to feed back into other tools.
//!
//! Match lines go to stdout; summaries and errors go to stderr.

use std::sync::OnceLock;

use bigrep::{Match, Similarity, Threshold};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BIGREP_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
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

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn use_colors_stderr() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

fn paint(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escapes
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

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score colored by how far it clears the threshold: bright green for an
/// exact match, green for comfortably above, yellow for barely above.
pub fn score_value(score: &Similarity, threshold: &Threshold) -> String {
    let text = score.to_string();
    if !use_colors() {
        return text;
    }
    let color = if score.is_exact() {
        BRIGHT_GREEN()
    } else if !score.meets(threshold) {
        GRAY()
    } else if score.to_f64() - threshold.to_f64() >= 0.1 {
        GREEN()
    } else {
        YELLOW()
    };
    format!("{}{}{}", color, text, RESET)
}

/// One output line for a match. Without `scores` this is the window text and
/// nothing else, the plain-grep form.
pub fn match_line(m: &Match, threshold: &Threshold, scores: bool, offset_width: usize) -> String {
    if !scores {
        return m.text.clone();
    }
    let offset = themed(GRAY, &[], &m.offset.to_string());
    format!(
        "{}  {}  {}",
        pad_left(&offset, offset_width),
        score_value(&m.score, threshold),
        themed(CYAN, &[BOLD], &m.text)
    )
}

/// Print every match to stdout, one per line.
pub fn print_matches(matches: &[Match], threshold: &Threshold, scores: bool) {
    let offset_width = matches
        .last()
        .map(|m| m.offset.to_string().len())
        .unwrap_or(1);
    for m in matches {
        println!("{}", match_line(m, threshold, scores, offset_width));
    }
}

/// One-line run summary on stderr.
pub fn print_summary(matches: usize, windows: usize, threshold: &Threshold) {
    let noun = if matches == 1 { "match" } else { "matches" };
    let count = paint(use_colors_stderr(), GREEN, &[BOLD], &matches.to_string());
    eprintln!(
        "{} {} in {} windows (threshold {})",
        count, noun, windows, threshold
    );
}

/// Error line on stderr with the full cause chain.
pub fn print_error(err: &anyhow::Error) {
    let label = paint(use_colors_stderr(), RED, &[BOLD], "error:");
    eprintln!("{} {:#}", label, err);
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
