// crates/infra/src/terminal.rs
//! ANSI implementation of the `StyleSink` port.

use std::io::{self, BufWriter, Stdout, Write};

use dirlist_ports::style::{Color, StyleSink, Weight};
use dirlist_shared_kernel::Result;

const CSI: &str = "\x1b[";

fn color_code(color: Color) -> u8 {
    match color {
        Color::Default => 39,
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::White => 37,
        Color::BrightBlack => 90,
    }
}

/// Writes text to `out`, adding SGR sequences only when `interactive`.
#[derive(Debug)]
pub struct TerminalStyleSink<W: Write> {
    out: W,
    interactive: bool,
}

impl TerminalStyleSink<BufWriter<Stdout>> {
    /// Buffered standard output.
    pub fn stdout(interactive: bool) -> Self {
        Self::new(BufWriter::new(io::stdout()), interactive)
    }
}

impl<W: Write> TerminalStyleSink<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn sgr(&mut self, code: u8) -> Result<()> {
        if self.interactive {
            write!(self.out, "{CSI}{code}m")?;
        }
        Ok(())
    }
}

impl<W: Write> StyleSink for TerminalStyleSink<W> {
    fn set_color(&mut self, color: Color) -> Result<()> {
        self.sgr(color_code(color))
    }

    fn set_weight(&mut self, weight: Weight) -> Result<()> {
        self.sgr(match weight {
            Weight::Bold => 1,
            Weight::Normal => 22,
        })
    }

    fn set_underline(&mut self, on: bool) -> Result<()> {
        self.sgr(if on { 4 } else { 24 })
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn is_redirected(&self) -> bool {
        !self.interactive
    }
}
