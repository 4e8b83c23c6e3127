use std::io::{self, BufRead, Write};

/// Line-oriented terminal I/O. Generic so sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    mask_secrets: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mask_secrets: false,
        }
    }

    /// Read secrets from the controlling terminal with echo turned off.
    /// Only meaningful when stdin is a TTY.
    pub fn with_secret_masking(mut self, enabled: bool) -> Self {
        self.mask_secrets = enabled;
        self
    }

    /// Shows `message` and reads one line with surrounding whitespace removed.
    /// Returns `None` once the input is exhausted. Bytes that are not valid
    /// UTF-8 come back as U+FFFD instead of failing the read.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Like `prompt`, but the answer is not echoed when masking is enabled.
    pub fn prompt_secret(&mut self, message: &str) -> io::Result<Option<String>> {
        if !self.mask_secrets {
            return self.prompt(message);
        }
        self.output.flush()?;
        match rpassword::prompt_password(message) {
            Ok(secret) => Ok(Some(secret.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
