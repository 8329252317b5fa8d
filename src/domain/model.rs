use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where the JSON array is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberSource {
    Stdin,
    File(PathBuf),
}

impl NumberSource {
    pub const STDIN: &'static str = "stdin";
}

impl From<&str> for NumberSource {
    fn from(value: &str) -> Self {
        if value == Self::STDIN {
            NumberSource::Stdin
        } else {
            NumberSource::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for NumberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberSource::Stdin => f.write_str(Self::STDIN),
            NumberSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Numbers read from the source together with their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub numbers: Vec<i64>,
    pub sum: i64,
}

/// Everything that ends up in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub numbers: Vec<i64>,
    pub sum: i64,
    pub http_status: u16,
}

impl Report {
    pub fn new(summary: Summary, http_status: u16) -> Self {
        Self {
            numbers: summary.numbers,
            sum: summary.sum,
            http_status,
        }
    }
}

/// `[1 2 3]`, `[]` when empty.
pub struct NumberList<'a>(pub &'a [i64]);

impl fmt::Display for NumberList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", n)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Numbers: {}", NumberList(&self.numbers))?;
        writeln!(f, "Sum: {}", self.sum)?;
        writeln!(f, "HTTP status: {}", self.http_status)
    }
}
