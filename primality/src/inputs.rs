use std::path::{Path, PathBuf};

use serde::Deserialize;

/// An error that occurs while loading an [Inputs] document
#[derive(Debug, thiserror::Error)]
pub enum InputsError {
    #[error("failed to read inputs file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid inputs: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A list of integers to check, loaded from TOML
///
/// The expected layout is:
///
/// ```toml
/// [inputs]
/// numbers = [1, 2, 3, 4, -5]
/// ```
///
/// An empty document, or an `[inputs]` table without `numbers`, is an empty list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Inputs {
    #[serde(default, rename = "inputs")]
    table: InputsTable,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputsTable {
    #[serde(default)]
    numbers: Vec<i64>,
}

impl Inputs {
    /// Create an inputs document holding `numbers`, in order
    pub fn new(numbers: Vec<i64>) -> Self {
        Self {
            table: InputsTable { numbers },
        }
    }

    /// Parse an inputs document from a TOML string
    pub fn from_toml_str(source: &str) -> Result<Self, InputsError> {
        let inputs: Self = toml::from_str(source)?;
        log::debug!(target: "primality", "parsed {} input(s)", inputs.len());
        Ok(inputs)
    }

    /// Read and parse the inputs document at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| InputsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(target: "primality", "loading inputs from '{}'", path.display());
        Self::from_toml_str(&source)
    }

    /// The integers to check, in document order
    #[inline]
    pub fn numbers(&self) -> &[i64] {
        &self.table.numbers
    }

    /// The number of integers listed
    #[inline]
    pub fn len(&self) -> usize {
        self.table.numbers.len()
    }

    /// Returns true if no integers are listed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.numbers.is_empty()
    }

    /// Consume the document, returning its integers
    pub fn into_numbers(self) -> Vec<i64> {
        self.table.numbers
    }
}

impl IntoIterator for Inputs {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.numbers.into_iter()
    }
}
