use std::io::{self, BufRead, Write};

/// Interactive line input used when no selectors were given
pub trait Prompt {
    /// Shows one line of the listing
    fn show(&mut self, line: &str) -> io::Result<()>;

    /// Blocks until the user entered a line, returned without the line ending
    fn read_line(&mut self) -> io::Result<String>;
}

/// Prompt backed by a reader and a writer, the console by default
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Listing on stderr keeps stdout free for the command output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn show(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no selection was entered",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
