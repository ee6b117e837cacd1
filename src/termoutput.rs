use std::fmt::Write as _;
use std::io::{self, Write};

use crate::led::{Color, LedFrame, BLACK, DRAGON_NUM, TOTAL_NUM};

/// Draws the badge LEDs as a single line of true-color blocks, redrawn in
/// place on every flush: the dragon head, a gap, then the bar.
pub struct TermOutput<W: Write> {
    out: W,
    buffer: [Color; TOTAL_NUM],
    line: String,
}

impl TermOutput<io::Stdout> {
    pub fn stdout() -> Self {
        TermOutput::new(io::stdout())
    }
}

impl<W: Write> TermOutput<W> {
    pub fn new(out: W) -> Self {
        TermOutput {
            out,
            buffer: [BLACK; TOTAL_NUM],
            line: String::with_capacity(TOTAL_NUM * 32),
        }
    }

    pub fn set(&mut self, index: usize, color: Color) {
        self.buffer[index] = color;
    }

    pub fn render(&mut self, frame: &LedFrame) -> io::Result<()> {
        for (index, color) in frame.pixels().into_iter().enumerate() {
            self.set(index, color);
        }
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.line.clear();
        self.line.push('\r');
        for (index, color) in self.buffer.iter().enumerate() {
            if index == DRAGON_NUM {
                self.line.push_str("\x1b[0m  ");
            }
            // Writing into a String cannot fail
            let _ = write!(
                self.line,
                "\x1b[38;2;{};{};{}m\u{2588}\u{2588}",
                color.red, color.green, color.blue
            );
        }
        self.line.push_str("\x1b[0m");

        self.out.write_all(self.line.as_bytes())?;
        self.out.flush()
    }

    pub fn blackout(&mut self) -> io::Result<()> {
        self.buffer = [BLACK; TOTAL_NUM];
        self.flush()?;
        writeln!(self.out)
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
