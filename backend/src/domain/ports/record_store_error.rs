//! Errors shared by the whole-collection repository ports.

use super::define_port_error;

define_port_error! {
    /// Failures raised while loading or replacing a persisted collection.
    pub enum RecordStoreError {
        /// The backing document could not be read, created or replaced.
        Io { path: String, message: String } => "record store I/O failed at {path}: {message}",
        /// The backing document exists but does not decode.
        Decode { path: String, message: String } => "record store document at {path} is malformed: {message}",
        /// The collection could not be serialised.
        Encode { message: String } => "record store serialisation failed: {message}",
    }
}
