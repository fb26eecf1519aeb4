use std::io;

use thiserror::Error;

/// Error type for constant-table building and include expansion.
///
/// Every variant is fatal to the run; there is no recovery path.
#[derive(Error, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize), serde(tag = "kind"))]
pub enum BundleError {
    /// Two definitions mapped different names to the same value.
    /// The Display form is the exact diagnostic line the CLI emits.
    #[error("Duplicate Const Value: {value}")]
    DuplicateConstValue { value: String },

    /// A file on the current expansion path was about to be re-entered.
    #[error("cyclic include of '{path}'")]
    CyclicInclude { path: String },

    /// The entry file or an included file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[cfg_attr(feature = "serialize", serde(serialize_with = "serialize_io"))]
        #[source]
        source: io::Error,
    },

    /// The output stream rejected a write.
    #[error("failed to write output: {source}")]
    Output {
        #[cfg_attr(feature = "serialize", serde(serialize_with = "serialize_io"))]
        #[source]
        source: io::Error,
    },
}
impl BundleError {
    pub fn duplicate_value<V: Into<String>>(value: V) -> Self {
        Self::DuplicateConstValue {
            value: value.into(),
        }
    }
    pub fn cyclic_include<P: Into<String>>(path: P) -> Self {
        Self::CyclicInclude { path: path.into() }
    }
    pub fn io<P: Into<String>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
    pub fn output(source: io::Error) -> Self {
        Self::Output { source }
    }
}

#[cfg(feature = "serialize")]
fn serialize_io<S: serde::Serializer>(error: &io::Error, se: S) -> Result<S::Ok, S::Error> {
    se.serialize_str(&format!("{}", error))
}
