// crates/ports/src/style.rs
use dirlist_shared_kernel::Result;

/// The palette the renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

/// Port for styled text output. Implementations decide how (and whether)
/// styles are shown; callers never emit control sequences themselves.
pub trait StyleSink {
    fn set_color(&mut self, color: Color) -> Result<()>;

    fn reset_colors(&mut self) -> Result<()> {
        self.set_color(Color::Default)
    }

    fn set_weight(&mut self, weight: Weight) -> Result<()>;

    fn set_underline(&mut self, on: bool) -> Result<()>;

    fn write(&mut self, text: &str) -> Result<()>;

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// `true` when output does not go to an interactive terminal.
    fn is_redirected(&self) -> bool;
}
