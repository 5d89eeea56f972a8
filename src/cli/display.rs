// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the typeahead CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `TYPEAHEAD_THEME` ("dark" or "light") when set, otherwise from the
//! `COLORFGBG` background hint, otherwise dark. `NO_COLOR` and non-TTY output
//! turn styling off entirely so piped output stays plain.

use std::sync::OnceLock;

use typeahead::{Distance, Suggestion};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TYPEAHEAD_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background colors 7 and up (except 8) are light
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

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(RED);
theme_color!(CYAN);
theme_color!(GRAY);

/// Colors only for a TTY, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus optional modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length excluding ANSI escapes.
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

fn border(s: &str) -> String {
    themed(GRAY, &[], s)
}

/// `┌─ LABEL ───┐`
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// `│ content   │`
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// `└───────────┘`
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Distance colored by closeness: green for near hits, red for far ones.
pub fn distance_label(distance: Distance) -> String {
    let text = format!("{:>3}", distance);
    let color: fn() -> String = match distance {
        0 | 1 => GREEN,
        2 | 3 => YELLOW,
        _ => RED,
    };
    themed(color, &[], &text)
}

/// Microseconds, colored green under 50µs, yellow under 500µs, red above.
pub fn timing_us(value: f64) -> String {
    let text = format!("{:>9.1}µs", value);
    let color: fn() -> String = if value < 50.0 {
        GREEN
    } else if value < 500.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

/// One line per suggestion: rank, distance, name.
pub fn suggestion_lines(ranking: &[Suggestion]) -> Vec<String> {
    ranking
        .iter()
        .enumerate()
        .map(|(rank, s)| format!(" {:>2}. {}  {}", rank + 1, distance_label(s.distance), s.name))
        .collect()
}
