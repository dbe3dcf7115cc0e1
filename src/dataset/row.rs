use std::collections::HashMap;

/// One CSV record, addressed by column name.
///
/// Cells are kept as the raw text read from the file; typed access goes
/// through the permissive accessors below. Missing, empty, or
/// unparseable cells resolve to the caller's default rather than an
/// error — input data is taken as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.cells.insert(key, value);
    }

    /// Raw cell text, untouched. None when the column is absent.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }

    /// Raw cell text for rule-hit traces: the trimmed cell when
    /// non-empty, otherwise `"0"` (the default a missing numeric
    /// field scores as).
    pub fn raw_or_zero(&self, key: &str) -> &str {
        match self.string(key) {
            Some(s) => s,
            None => "0",
        }
    }

    /// Numeric cell value. None when the column is absent, empty, or
    /// not parseable as a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.string(key)?.parse().ok()
    }

    /// Boolean cell value with a default for absent or unrecognized
    /// cells. Accepts true/false, yes/no, and 1/0, case-insensitively.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.string(key) {
            Some(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                _ => default,
            },
            None => default,
        }
    }

    /// Trimmed string cell value. None when absent or empty.
    pub fn string(&self, key: &str) -> Option<&str> {
        let value = self.cells.get(key)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}
