// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling for the scour CLI.
//!
//! Two palettes: OneDark for dark terminals, One Light for light ones.
//! `SCOUR_THEME` picks one explicitly; otherwise the `COLORFGBG` background
//! hint decides, and dark wins when there is no hint. Styling is off when
//! `NO_COLOR` is set or stdout is not a TTY.

use std::sync::OnceLock;

use scour::{Highlight, PageToken, PageWindow};

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Colors for one theme. `mark` is painted as a background.
#[derive(Debug, Clone, Copy)]
struct Palette {
    warn: Rgb,
    current: Rgb,
    badge: Rgb,
    accent: Rgb,
    dim: Rgb,
    mark: Rgb,
}

const ONE_DARK: Palette = Palette {
    warn: (224, 108, 117),   // #e06c75
    current: (152, 195, 121), // #98c379
    badge: (229, 192, 123),  // #e5c07b
    accent: (86, 182, 194),  // #56b6c2
    dim: (92, 99, 112),      // #5c6370
    mark: (94, 52, 56),
};

const ONE_LIGHT: Palette = Palette {
    warn: (228, 86, 73),     // #e45649
    current: (80, 161, 79),  // #50a14f
    badge: (193, 132, 1),    // #c18401
    accent: (1, 132, 188),   // #0184bc
    dim: (160, 161, 167),    // #a0a1a7
    mark: (254, 226, 226),   // #fee2e2
};

impl Theme {
    fn from_env() -> Self {
        if let Ok(name) = std::env::var("SCOUR_THEME") {
            match name.to_ascii_lowercase().as_str() {
                "light" => return Theme::Light,
                "dark" => return Theme::Dark,
                _ => {}
            }
        }

        // "fg;bg" where bg is an ANSI slot; 7 and 9..=15 are light backgrounds
        let light_background = std::env::var("COLORFGBG")
            .ok()
            .and_then(|pair| pair.rsplit(';').next()?.parse::<u8>().ok())
            .is_some_and(|bg| bg == 7 || (9..=15).contains(&bg));

        if light_background {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }
}

/// The theme for this process, detected once.
pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(Theme::from_env)
}

fn fg((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

fn bg((r, g, b): Rgb) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}

// ═══════════════════════════════════════════════════════════════════════════
// PAINTING
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in the escape for `pick` (and bold if asked), or return it
/// untouched when colors are off.
fn paint(pick: fn(&Palette) -> Rgb, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{weight}{}{text}{RESET}", fg(pick(theme().palette())))
}

/// Printed width of `s`, skipping SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut width = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // consume through the terminating 'm'
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{s}{}", " ".repeat(fill))
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `── LABEL ──`
pub fn heading(label: &str) -> String {
    let rule = paint(|p| p.dim, false, "──");
    format!("{rule} {} {rule}", paint(|p| p.accent, true, label))
}

/// Snippet with the matched segment emphasized. Without colors the match is
/// wrapped in `[` `]` so it still stands out.
pub fn highlighted(h: &Highlight<'_>) -> String {
    match h {
        Highlight::Split {
            prefix,
            matched,
            suffix,
        } => {
            let mark = if use_colors() {
                format!("{BOLD}{}{matched}{RESET}", bg(theme().palette().mark))
            } else {
                format!("[{matched}]")
            };
            format!("{prefix}{mark}{suffix}")
        }
        Highlight::Unmatched { text } => (*text).to_string(),
    }
}

/// 1-based result badge: ` 3.`
pub fn index_badge(index: usize) -> String {
    paint(|p| p.badge, false, &format!("{:>2}.", index + 1))
}

/// `1 … 4 [5] 6 … 10`
pub fn page_window(window: &PageWindow, current: usize) -> String {
    let tokens: Vec<String> = window
        .tokens()
        .iter()
        .map(|token| match *token {
            PageToken::Page(n) if n == current => paint(|p| p.current, true, &format!("[{n}]")),
            PageToken::Page(n) => n.to_string(),
            PageToken::Ellipsis => paint(|p| p.dim, false, "…"),
        })
        .collect();
    tokens.join(" ")
}

pub fn muted(text: &str) -> String {
    paint(|p| p.dim, false, text)
}

pub fn warning(text: &str) -> String {
    paint(|p| p.warn, true, text)
}
