//! Configuration for record assertions.

/// How [`assert_record_with`](super::assert_record_with) checks fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordConfig {
    /// Whether `boolean` fields are checked.
    pub(crate) check_booleans: bool,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            check_booleans: true,
        }
    }
}

impl RecordConfig {
    /// Create a new RecordConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `boolean` fields without checking them.
    ///
    /// Matches producers that declare boolean fields but never validated them.
    pub fn lenient() -> Self {
        Self::default().check_booleans(false)
    }

    /// Set whether `boolean` fields are checked.
    pub fn check_booleans(mut self, value: bool) -> Self {
        self.check_booleans = value;
        self
    }

    pub fn checks_booleans(&self) -> bool {
        self.check_booleans
    }
}
