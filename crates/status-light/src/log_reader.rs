//! File Log Reader
//!
//! Reads log files with tailing support for the debug console.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::PathBuf;

/// Reads log file with tailing support
pub struct FileLogReader {
    path: PathBuf,
    last_position: u64,
    lines: Vec<String>,
    max_lines: usize,
}

impl FileLogReader {
    pub fn new(path: PathBuf, max_lines: usize) -> Self {
        Self {
            path,
            last_position: 0,
            lines: Vec::new(),
            max_lines,
        }
    }

    /// Read initial content (last `max_lines` lines)
    pub fn read_initial(&mut self) -> std::io::Result<()> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(&file);

        let all_lines: Vec<String> = reader.lines().map_while(Result::ok).collect();
        let start = all_lines.len().saturating_sub(self.max_lines);
        self.lines = all_lines[start..].to_vec();

        self.last_position = file.metadata()?.len();
        Ok(())
    }

    /// Poll for new lines, returns the number of new lines read
    pub fn poll_new_lines(&mut self) -> std::io::Result<usize> {
        let mut file = File::open(&self.path)?;
        let current_size = file.metadata()?.len();

        if current_size <= self.last_position {
            return Ok(0);
        }

        file.seek(SeekFrom::Start(self.last_position))?;
        let reader = BufReader::new(file);

        let mut new_count = 0;
        for line in reader.lines().map_while(Result::ok) {
            self.lines.push(line);
            new_count += 1;
        }
        if self.lines.len() > self.max_lines {
            let excess = self.lines.len() - self.max_lines;
            self.lines.drain(..excess);
        }

        self.last_position = current_size;
        Ok(new_count)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Clear lines (but keep tailing position)
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_log(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("status-light-{}-{}.log", name, std::process::id()))
    }

    #[test]
    fn test_reads_tail_and_new_lines() {
        let path = temp_log("tail");
        {
            let mut file = File::create(&path).unwrap();
            for i in 0..5 {
                writeln!(file, "line {}", i).unwrap();
            }
        }

        let mut reader = FileLogReader::new(path.clone(), 3);
        reader.read_initial().unwrap();
        assert_eq!(reader.lines(), ["line 2", "line 3", "line 4"]);

        {
            let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(file, "line 5").unwrap();
        }
        assert_eq!(reader.poll_new_lines().unwrap(), 1);
        assert_eq!(reader.lines(), ["line 3", "line 4", "line 5"]);
        assert_eq!(reader.poll_new_lines().unwrap(), 0);

        reader.clear();
        assert!(reader.lines().is_empty());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut reader = FileLogReader::new(temp_log("missing"), 10);
        assert!(reader.read_initial().is_err());
    }
}
