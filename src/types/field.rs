//! Explicit presence model for fields read from loosely-typed JSON objects
//!
//! Input documents are plain JSON objects, so any field may be missing, set to
//! `null`, or hold a value of the wrong type. `FieldValue` keeps those cases
//! apart so the reconciler can report each one precisely.

/// State of a single field in an input record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<T> {
    /// The key does not appear in the object
    Absent,

    /// The key is present with a JSON `null` value
    Null,

    /// The key is present but its value has the wrong type
    Invalid,

    /// The key is present with a usable value
    Present(T),
}

impl<T> FieldValue<T> {
    /// Returns the value if the field is present and usable
    pub fn present(&self) -> Option<&T> {
        match self {
            FieldValue::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the key was missing or explicitly `null`
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Absent | FieldValue::Null)
    }
}

impl<T> From<Option<T>> for FieldValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldValue::Present(value),
            None => FieldValue::Absent,
        }
    }
}
