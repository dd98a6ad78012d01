//! Text styles and terminal control operations.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, ContentStyle, Print},
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// Text styles used by the layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Reset,
    Bold,
    Green,
    Yellow,
    Red,
    Cyan,
    Gray,
}

/// Cursor and erase operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Erase the whole screen and home the cursor
    ClearScreen,
    /// Move the cursor to the top-left corner
    CursorHome,
    /// Return to column 0 and erase the line
    ClearLine,
    /// Erase from the cursor to the end of the line
    ClearToEol,
    /// Erase everything below the cursor
    ClearBelow,
}

impl Style {
    /// Foreground color for this style, if it sets one.
    pub const fn color(self) -> Option<Color> {
        match self {
            Style::Green => Some(Color::Green),
            Style::Yellow => Some(Color::Yellow),
            Style::Red => Some(Color::Red),
            Style::Cyan => Some(Color::Cyan),
            Style::Gray => Some(Color::DarkGrey),
            Style::Reset | Style::Bold => None,
        }
    }

    fn content_style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.color();
        if self == Style::Bold {
            style.attributes.set(Attribute::Bold);
        }
        style
    }
}

impl Control {
    /// Queue this operation on `out` without flushing.
    pub fn queue(self, out: &mut impl Write) -> std::io::Result<()> {
        match self {
            Control::ClearScreen => queue!(out, Clear(ClearType::All), MoveTo(0, 0)),
            Control::CursorHome => queue!(out, MoveTo(0, 0)),
            Control::ClearLine => queue!(out, Print('\r'), Clear(ClearType::CurrentLine)),
            Control::ClearToEol => queue!(out, Clear(ClearType::UntilNewLine)),
            Control::ClearBelow => queue!(out, Clear(ClearType::FromCursorDown)),
        }
    }

    /// The bytes [`Control::queue`] writes, as a string.
    pub fn sequence(self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.queue(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Wrap `text` in `style`; styled text is reset afterwards.
pub fn paint(style: Style, text: impl AsRef<str>) -> String {
    style.content_style().apply(text.as_ref()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_resets() {
        let green = paint(Style::Green, "ok");
        assert!(green.starts_with("\x1b["));
        assert!(green.contains("ok"));
        assert!(green.ends_with('m'));
        assert_ne!(green, paint(Style::Red, "ok"));

        assert_eq!(paint(Style::Reset, "plain"), "plain");
    }

    #[test]
    fn test_bold_has_no_color() {
        assert_eq!(Style::Bold.color(), None);
        assert_eq!(Style::Gray.color(), Some(Color::DarkGrey));
        assert_ne!(paint(Style::Bold, "x"), "x");
    }

    #[test]
    fn test_controls_are_distinct() {
        let codes = [
            Control::ClearScreen.sequence(),
            Control::CursorHome.sequence(),
            Control::ClearLine.sequence(),
            Control::ClearToEol.sequence(),
            Control::ClearBelow.sequence(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_clear_line_returns_to_column_zero() {
        assert!(Control::ClearLine.sequence().starts_with('\r'));
    }
}
