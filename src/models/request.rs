//! Validated resize request.

use serde_json::Value;

use crate::error::ProcessError;

/// Largest accepted target dimension on either axis. The body limit bounds
/// the input, but nothing else bounds the output allocation.
pub const MAX_TARGET_DIMENSION: u32 = 32_768;

/// A resize request whose fields have passed presence and type validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub input_jpeg: String,
    pub desired_width: u32,
    pub desired_height: u32,
}

impl ResizeRequest {
    /// Validate a parsed JSON document into a request.
    ///
    /// Presence is checked in the fixed order `input_jpeg`, `desired_width`,
    /// `desired_height`; the first missing field wins. Type and range checks
    /// run after all presence checks, in the same field order.
    pub fn from_document(doc: &Value) -> Result<Self, ProcessError> {
        for field in ["input_jpeg", "desired_width", "desired_height"] {
            if doc.get(field).is_none() {
                return Err(ProcessError::MissingField(field));
            }
        }

        let input_jpeg = doc["input_jpeg"]
            .as_str()
            .ok_or(ProcessError::InvalidField {
                field: "input_jpeg",
                expected: "a string",
            })?
            .to_string();

        let desired_width = dimension(doc, "desired_width")?;
        let desired_height = dimension(doc, "desired_height")?;

        Ok(Self {
            input_jpeg,
            desired_width,
            desired_height,
        })
    }
}

fn dimension(doc: &Value, field: &'static str) -> Result<u32, ProcessError> {
    let value = doc[field]
        .as_i64()
        .filter(|v| *v > 0)
        .ok_or(ProcessError::InvalidField {
            field,
            expected: "a positive integer",
        })?;

    if value > i64::from(MAX_TARGET_DIMENSION) {
        return Err(ProcessError::InvalidField {
            field,
            expected: "a positive integer no larger than 32768",
        });
    }

    Ok(value as u32)
}
