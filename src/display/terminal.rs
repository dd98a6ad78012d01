//! In-place terminal frame output.

use crate::display::style::{paint, Control, Style};
use crate::error::Result;
use crossterm::{queue, style::Print};
use std::io::Write;

/// Whether the next frame is the first one drawn after the initial clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    First,
    Subsequent,
}

/// Writes frames to a terminal without clearing it between frames.
///
/// The screen is cleared once in [`Screen::clear`]. Later full frames home
/// the cursor and overwrite in place; compact frames rewrite the current
/// line only.
pub struct Screen<W: Write> {
    out: W,
    phase: FramePhase,
    frames: u64,
}

impl<W: Write> Screen<W> {
    /// Wrap a writer; the next frame is treated as the first.
    pub fn new(out: W) -> Self {
        Self {
            out,
            phase: FramePhase::First,
            frames: 0,
        }
    }

    /// Phase the next frame will be drawn in.
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) -> Result<()> {
        Control::ClearScreen.queue(&mut self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Draw a multi-line frame, homing the cursor unless it is the first.
    ///
    /// Rows left over from a taller previous frame are erased.
    pub fn present_full(&mut self, lines: &[String]) -> Result<()> {
        let mut frame = Vec::new();
        if self.phase == FramePhase::Subsequent {
            Control::CursorHome.queue(&mut frame)?;
        }
        for line in lines {
            queue!(frame, Print(line))?;
            Control::ClearToEol.queue(&mut frame)?;
            queue!(frame, Print('\n'))?;
        }
        Control::ClearBelow.queue(&mut frame)?;
        self.commit(&frame)
    }

    /// Rewrite the current line.
    pub fn present_line(&mut self, line: &str) -> Result<()> {
        let mut frame = Vec::new();
        Control::ClearLine.queue(&mut frame)?;
        queue!(frame, Print(line))?;
        self.commit(&frame)
    }

    /// Print text as-is, for one-shot output.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.commit(text.as_bytes())
    }

    /// Print the shutdown confirmation.
    pub fn farewell(&mut self) -> Result<()> {
        writeln!(self.out, "\n\n{}", paint(Style::Green, "✓ Monitoring stopped"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Print a one-line notice outside of any frame.
    pub fn notice(&mut self, style: Style, text: &str) -> Result<()> {
        writeln!(self.out, "{}", paint(style, text))?;
        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn commit(&mut self, frame: &[u8]) -> Result<()> {
        // One write per frame keeps partially drawn frames off the terminal.
        self.out.write_all(frame)?;
        self.out.flush()?;
        self.phase = FramePhase::Subsequent;
        self.frames += 1;
        Ok(())
    }
}
