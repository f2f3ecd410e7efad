use std::io::{self, Stdout, Write};

/// Terminal output the viewer draws into: a byte sink that knows its size in
/// character cells.
pub trait Screen: Write {
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// The real terminal, via crossterm on stdout.
pub struct CrosstermScreen {
    out: Stdout,
}

impl CrosstermScreen {
    pub fn new(out: Stdout) -> Self {
        Self { out }
    }
}

impl Write for CrosstermScreen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

/// In-memory screen for tests: fixed size, keeps everything written.
#[cfg(any(test, feature = "test-utils"))]
pub struct MemoryScreen {
    pub width: u16,
    pub height: u16,
    pub output: Vec<u8>,
    pub flushes: usize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            output: Vec::new(),
            flushes: 0,
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Write for MemoryScreen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Screen for MemoryScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }
}
