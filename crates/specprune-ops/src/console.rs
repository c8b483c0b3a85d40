//! Output sinks for run narration.

/// Line-oriented sink for user-facing output.
pub trait Console {
    /// Write a line to the standard output stream.
    fn out(&mut self, line: &str);

    /// Write a line to the error stream.
    fn err(&mut self, line: &str);
}

/// Writes to the process's stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn out(&mut self, line: &str) {
        println!("{line}");
    }

    fn err(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    pub out: Vec<String>,
    pub err: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for MemoryConsole {
    fn out(&mut self, line: &str) {
        self.out.push(line.to_string());
    }

    fn err(&mut self, line: &str) {
        self.err.push(line.to_string());
    }
}
