//! Raw command lines entered during the session.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    lines: Vec<String>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank lines are not recorded.
    pub fn add(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.lines.push(line.to_string());
        }
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
