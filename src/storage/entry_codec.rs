//! Payload codec for replicated "set" commands.
//!
//! A command travels inside a log entry as the JSON array
//! `[key, value, reserved]`. The third slot is reserved and always written
//! empty.

use crate::ApplyError;
use crate::SerializationError;

const COMMAND_FIELDS: usize = 3;

/// A single "set key to value" operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KvCommand {
    pub key: String,
    pub value: String,
}

impl KvCommand {
    pub fn set(
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Encodes the command as a log entry payload
    pub fn encode(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec(&(&self.key, &self.value, ""))?)
    }

    /// Decodes a log entry payload.
    ///
    /// Arrays shorter than three strings are accepted and the missing slots
    /// read as empty strings; anything else that is not an array of at most
    /// three strings is rejected.
    pub fn decode(payload: &[u8]) -> Result<Self, ApplyError> {
        let fields: Vec<String> = serde_json::from_slice(payload)
            .map_err(|e| ApplyError::MalformedEntry(e.to_string()))?;

        if fields.len() > COMMAND_FIELDS {
            return Err(ApplyError::MalformedEntry(format!(
                "expected at most {} fields, found {}",
                COMMAND_FIELDS,
                fields.len()
            )));
        }

        let mut fields = fields.into_iter();
        Ok(Self {
            key: fields.next().unwrap_or_default(),
            value: fields.next().unwrap_or_default(),
        })
    }
}
