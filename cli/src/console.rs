use std::io::{self, BufRead, Write};

use minesweeper_alpha_core::{CommandError, Frame, Frontend};

pub const PROMPT: &str = "minesweeper-alpha: ";

/// Terminal frontend: board and prompt go to `out`, command errors to `err`.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl Console<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

/// Draws the board table with row indices on the left and column indices below.
pub fn write_frame(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    writeln!(out, "Rounds Completed: {}", frame.rounds)?;
    writeln!(out)?;
    for (row, cells) in frame.cells.outer_iter().enumerate() {
        write!(out, " {row} ")?;
        for token in cells {
            write!(out, "|{token}")?;
        }
        writeln!(out, "|")?;
    }
    write!(out, "  ")?;
    for col in 0..frame.cells.ncols() {
        write!(out, "   {col}")?;
    }
    writeln!(out)
}

impl<R: BufRead, W: Write, E: Write> Frontend for Console<R, W, E> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        writeln!(self.out)?;
        Ok(Some(line))
    }

    fn show_frame(&mut self, frame: &Frame) -> io::Result<()> {
        writeln!(self.out)?;
        write_frame(&mut self.out, frame)
    }

    fn show_help(&mut self, help: &str) -> io::Result<()> {
        writeln!(self.out, "{help}")
    }

    fn report(&mut self, error: &CommandError) -> io::Result<()> {
        writeln!(self.err)?;
        writeln!(self.err, "{error}")
    }
}
