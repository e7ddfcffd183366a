//! Dialog boxes: named text sequences shown via `show_dialog` statements.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub name: String,
    pub lines: Vec<String>,
}

impl Dialog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), lines: Vec::new() }
    }
}
