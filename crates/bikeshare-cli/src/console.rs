//! Line-based console I/O used by the outer menu and the report sessions.

use std::io::{self, BufRead, Write};

pub trait Console {
    /// Write `text` followed by a newline.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Whether output may carry ANSI styling.
    fn supports_color(&self) -> bool {
        false
    }
}

/// Console over the process's stdin and stdout.
pub struct StdConsole {
    color: bool,
}

impl StdConsole {
    pub fn new() -> Self {
        use is_terminal::IsTerminal;
        Self {
            color: io::stdout().is_terminal(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn supports_color(&self) -> bool {
        self.color
    }
}
