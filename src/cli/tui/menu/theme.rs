use ratatui::crossterm::style;
use ratatui::style::{Color, Modifier, Style};

use crate::error::{ChooserError, Result};

/// How many colours the terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    /// 24-bit RGB, the installer colours are used exactly
    TrueColor,
    /// Closest matches from the xterm 256-colour palette
    Indexed256,
}

impl ColorSupport {
    /// Inspect `TERM` and ask crossterm how many colours are available
    pub fn detect() -> Result<Self> {
        let term = std::env::var("TERM").ok();
        Self::classify(term.as_deref(), style::available_color_count())
    }

    /// `color_count` is what [`style::available_color_count`] reports, which
    /// never goes below 8, so monochrome terminals are recognised by name.
    pub fn classify(term: Option<&str>, color_count: u16) -> Result<Self> {
        let term = term.unwrap_or("");
        if is_monochrome(term) {
            return Err(ChooserError::TerminalInit(format!(
                "terminal {:?} has no colour support",
                term
            )));
        }

        if color_count == u16::MAX {
            Ok(ColorSupport::TrueColor)
        } else {
            Ok(ColorSupport::Indexed256)
        }
    }
}

/// Terminfo names without colour: `dumb`, the DEC VT family and the
/// `-mono`/`-m` variants such as `xterm-mono` or `linux-m`
fn is_monochrome(term: &str) -> bool {
    let mut parts = term.split('-');
    let base = parts.next().unwrap_or("");
    if matches!(
        base,
        "" | "dumb" | "vt52" | "vt100" | "vt102" | "vt220" | "vt320" | "vt420"
    ) {
        return true;
    }
    parts.any(|variant| variant == "mono" || variant == "m")
}

/// The four installer colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    orange: Color,
    white: Color,
    green: Color,
    black: Color,
}

impl Palette {
    fn for_support(support: ColorSupport) -> Self {
        match support {
            ColorSupport::TrueColor => Self {
                orange: Color::Rgb(0xE9, 0x54, 0x20),
                white: Color::Rgb(0xFF, 0xFF, 0xFF),
                green: Color::Rgb(0x0E, 0x84, 0x20),
                black: Color::Rgb(0x00, 0x00, 0x00),
            },
            // 202 is not quite the orange but close
            ColorSupport::Indexed256 => Self {
                orange: Color::Indexed(202),
                white: Color::Indexed(231),
                green: Color::Indexed(28),
                black: Color::Indexed(0),
            },
        }
    }
}

/// Banner geometry and colours for the menu screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Rows reserved at the top of the screen for the banner
    pub banner_height: u16,
    /// Half-block bands above and below the title
    pub banner_band: Style,
    pub banner_title: Style,
    /// Highlighted menu entry
    pub selected: Style,
    pub item: Style,
    pub border: Style,
}

impl Theme {
    /// Subiquity look: orange banner, green highlighted button
    pub fn subiquity(support: ColorSupport) -> Self {
        let palette = Palette::for_support(support);
        Self {
            banner_height: 3,
            banner_band: Style::default().fg(palette.black).bg(palette.orange),
            banner_title: Style::default().fg(palette.white).bg(palette.orange),
            selected: Style::default()
                .fg(palette.white)
                .bg(palette.green)
                .add_modifier(Modifier::BOLD),
            item: Style::default(),
            border: Style::default().fg(palette.white),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::subiquity(ColorSupport::Indexed256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colour_terminal_is_rejected() {
        for term in [None, Some(""), Some("dumb"), Some("vt100"), Some("vt220")] {
            assert!(
                matches!(
                    ColorSupport::classify(term, u16::MAX),
                    Err(ChooserError::TerminalInit(_))
                ),
                "{:?}",
                term
            );
        }
        for term in ["xterm-mono", "linux-m", "vt100-nav"] {
            assert!(ColorSupport::classify(Some(term), 8).is_err(), "{}", term);
        }
    }

    #[test]
    fn test_colour_detection() {
        assert_eq!(
            ColorSupport::classify(Some("xterm-256color"), u16::MAX).unwrap(),
            ColorSupport::TrueColor
        );
        assert_eq!(
            ColorSupport::classify(Some("xterm-256color"), 256).unwrap(),
            ColorSupport::Indexed256
        );
        assert_eq!(
            ColorSupport::classify(Some("linux"), 8).unwrap(),
            ColorSupport::Indexed256
        );
        // "m" only counts as a whole variant
        assert!(ColorSupport::classify(Some("rxvt-unicode-256color"), 256).is_ok());
        assert!(ColorSupport::classify(Some("tmux"), 256).is_ok());
    }

    #[test]
    fn test_fallback_palette() {
        let theme = Theme::subiquity(ColorSupport::Indexed256);
        assert_eq!(theme.banner_height, 3);
        assert_eq!(theme.banner_band.bg, Some(Color::Indexed(202)));
        assert_eq!(theme.banner_title.fg, Some(Color::Indexed(231)));
        assert_eq!(theme.selected.bg, Some(Color::Indexed(28)));
    }

    #[test]
    fn test_true_colour_palette() {
        let theme = Theme::subiquity(ColorSupport::TrueColor);
        assert_eq!(theme.banner_band.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(theme.banner_band.bg, Some(Color::Rgb(0xE9, 0x54, 0x20)));
        assert_eq!(theme.selected.bg, Some(Color::Rgb(0x0E, 0x84, 0x20)));
    }
}
