//! Screen: flushes a framebuffer to a real terminal.
//!
//! Every draw diffs the new frame against the previous one and repaints only
//! the horizontal runs of cells that changed. A full repaint happens on the
//! first draw, after [`Screen::invalidate`], and whenever the frame size
//! changes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Rgb, Style};

/// One horizontal span of cells to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

pub struct Screen {
    stdout: io::Stdout,
    last: Option<Frame>,
    runs: Vec<Run>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            runs: Vec::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full repaint (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, swapping it into internal state.
    ///
    /// Callers keep one [`Frame`] and pass it in every draw; the screen swaps
    /// it with the previously drawn frame afterwards, so both allocations are
    /// reused indefinitely.
    pub fn draw_swap(&mut self, frame: &mut Frame) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => prev,
            // First draw, invalidated, or resized: repaint everything.
            _ => {
                self.stdout
                    .queue(terminal::Clear(terminal::ClearType::All))?;
                let mut blank = Frame::new(frame.width(), frame.height());
                // A cleared terminal shows none of our cells yet, so diff
                // against an impossible cell to mark every position dirty.
                blank.clear(crate::frame::Cell::new('\0', Style::default()));
                blank
            }
        };

        let mut runs = std::mem::take(&mut self.runs);
        collect_changed_runs(&prev, frame, &mut runs);
        self.paint(frame, &runs)?;
        self.runs = runs;

        std::mem::swap(&mut prev, frame);
        self.last = Some(prev);
        Ok(())
    }

    fn paint(&mut self, frame: &Frame, runs: &[Run]) -> Result<()> {
        let mut pen: Option<Style> = None;

        for run in runs {
            self.stdout.queue(cursor::MoveTo(run.x, run.y))?;
            for dx in 0..run.len {
                let cell = frame.get(run.x + dx, run.y).unwrap_or_default();
                if pen != Some(cell.style) {
                    self.set_pen(cell.style)?;
                    pen = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn set_pen(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Collect the horizontal runs where `next` differs from `prev` into `out`.
///
/// Both frames must have equal dimensions; `draw_swap` guarantees that by
/// synthesizing an all-dirty previous frame otherwise.
fn collect_changed_runs(prev: &Frame, next: &Frame, out: &mut Vec<Run>) {
    out.clear();
    let (w, h) = (next.width(), next.height());

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            out.push(Run {
                x: start,
                y,
                len: x - start,
            });
        }
    }
}
