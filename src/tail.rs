/// Last-N-lines reader
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_LINES: usize = 10;

/// Keep the last `n` lines of `reader`, trimmed, in original order.
///
/// At most `n` lines are held at any time.
pub fn tail_lines<R: BufRead>(reader: R, n: usize) -> io::Result<Vec<String>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut window: VecDeque<String> = VecDeque::with_capacity(n.min(1024));

    for line in reader.lines() {
        let line = line?;
        if window.len() == n {
            window.pop_front();
        }
        window.push_back(line.trim().to_string());
    }

    Ok(window.into())
}

/// Open `path` and keep its last `n` lines
pub fn tail_file<P: AsRef<Path>>(path: P, n: usize) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    tail_lines(BufReader::new(file), n)
}
