use std::io::BufRead;

/// Line-oriented input for the game loops.
pub trait LineSource {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Option<String>;

    /// First non-whitespace character of the next line. A blank line yields
    /// `None`, same as the end of input.
    fn next_choice(&mut self) -> Option<char> {
        self.read_line()
            .and_then(|line| line.chars().find(|c| !c.is_whitespace()))
    }
}

/// Reads lines from any buffered reader (stdin, a file, a byte slice in tests).
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self) -> Option<String> {
        let mut bytes = Vec::new();
        match self.inner.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                while matches!(bytes.last(), Some(b'\n' | b'\r')) {
                    bytes.pop();
                }
                // Undecodable bytes become U+FFFD, which no command maps to.
                Some(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(e) => {
                // Treated like end of input: the session just ends.
                log::warn!("Failed to read input line: {}", e);
                None
            }
        }
    }
}
