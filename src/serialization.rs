//! SBR model artifact format.
//!
//! A compact binary container for the trained rating regressor's
//! parameters, with a JSON metadata section for operator-facing context.
//!
//! Format (SBR1):
//! ```text
//! [4-byte magic: "SBR1"]
//! [4-byte metadata_len: u32 little-endian]
//! [JSON metadata: arbitrary key-value pairs]
//! [4-byte n_coefficients: u32 little-endian]
//! [coefficients: f32 little-endian each]
//! [intercept: f32 little-endian]
//! [4-byte CRC32: checksum of all preceding bytes]
//! ```
//!
//! Example:
//! ```rust
//! use sabor::serialization::{SbrReader, SbrWriter};
//! use serde_json::json;
//!
//! let mut writer = SbrWriter::new();
//! writer.set_metadata("model_name", json!("rating-ols"));
//! writer.set_coefficients(&[0.1, -0.2, 0.3]);
//! writer.set_intercept(4.0);
//!
//! let bytes = writer.to_bytes().unwrap();
//! let reader = SbrReader::from_bytes(bytes).unwrap();
//! assert_eq!(reader.coefficients(), &[0.1, -0.2, 0.3]);
//! assert_eq!(reader.intercept(), 4.0);
//! ```

use crate::error::{Result, SaborError};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Magic bytes for the SBR format - "SBR1"
pub const SBR_MAGIC: [u8; 4] = [b'S', b'B', b'R', b'1'];

/// SBR file metadata - arbitrary JSON
pub type SbrMetadata = BTreeMap<String, JsonValue>;

/// SBR format writer
#[derive(Debug, Default)]
pub struct SbrWriter {
    metadata: SbrMetadata,
    coefficients: Vec<f32>,
    intercept: f32,
}

impl SbrWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a metadata key.
    pub fn set_metadata(&mut self, key: &str, value: JsonValue) {
        self.metadata.insert(key.to_string(), value);
    }

    /// Sets the coefficient payload.
    pub fn set_coefficients(&mut self, coefficients: &[f32]) {
        self.coefficients = coefficients.to_vec();
    }

    /// Sets the intercept term.
    pub fn set_intercept(&mut self, intercept: f32) {
        self.intercept = intercept;
    }

    /// Serializes to bytes.
    ///
    /// # Errors
    /// Returns an error if metadata serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut output = Vec::new();

        // 1. Magic
        output.extend_from_slice(&SBR_MAGIC);

        // 2. Metadata
        let metadata_json = serde_json::to_string(&self.metadata)
            .map_err(|e| SaborError::Serialization(format!("metadata: {e}")))?;
        let metadata_bytes = metadata_json.as_bytes();
        output.extend_from_slice(&(metadata_bytes.len() as u32).to_le_bytes());
        output.extend_from_slice(metadata_bytes);

        // 3. Coefficients
        output.extend_from_slice(&(self.coefficients.len() as u32).to_le_bytes());
        for &c in &self.coefficients {
            output.extend_from_slice(&c.to_le_bytes());
        }

        // 4. Intercept
        output.extend_from_slice(&self.intercept.to_le_bytes());

        // 5. CRC32
        let crc = crc32(&output);
        output.extend_from_slice(&crc.to_le_bytes());

        Ok(output)
    }

    /// Writes to a file.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// SBR format reader
#[derive(Debug)]
pub struct SbrReader {
    /// Parsed metadata
    pub metadata: SbrMetadata,
    coefficients: Vec<f32>,
    intercept: f32,
}

impl SbrReader {
    /// Loads an SBR file from a path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid SBR.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Parses SBR format from bytes.
    ///
    /// # Errors
    /// Returns an error on bad magic, truncation, malformed metadata, or
    /// checksum mismatch.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        // Magic + metadata_len + n_coefficients + intercept + CRC32.
        const MIN_LEN: usize = 4 + 4 + 4 + 4 + 4;
        if data.len() < MIN_LEN {
            return Err(SaborError::FormatError {
                message: format!("file too short: {} bytes", data.len()),
            });
        }

        let magic = &data[0..4];
        if magic != SBR_MAGIC {
            return Err(SaborError::FormatError {
                message: format!("invalid magic: expected SBR1, got {magic:?}"),
            });
        }

        // Verify the trailer before trusting any length field.
        let body_len = data.len() - 4;
        let stored_crc = u32::from_le_bytes([
            data[body_len],
            data[body_len + 1],
            data[body_len + 2],
            data[body_len + 3],
        ]);
        let actual_crc = crc32(&data[..body_len]);
        if stored_crc != actual_crc {
            return Err(SaborError::ChecksumMismatch {
                expected: stored_crc,
                actual: actual_crc,
            });
        }

        let metadata_len = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;
        let coef_count_offset = 8 + metadata_len;
        if body_len < coef_count_offset + 4 {
            return Err(SaborError::FormatError {
                message: "file too short for metadata".to_string(),
            });
        }

        let metadata: SbrMetadata = if metadata_len > 0 {
            serde_json::from_slice(&data[8..coef_count_offset])
                .map_err(|e| SaborError::Serialization(format!("metadata: {e}")))?
        } else {
            BTreeMap::new()
        };

        let n_coefficients = u32::from_le_bytes([
            data[coef_count_offset],
            data[coef_count_offset + 1],
            data[coef_count_offset + 2],
            data[coef_count_offset + 3],
        ]) as usize;

        let coef_offset = coef_count_offset + 4;
        let intercept_offset = coef_offset + n_coefficients * 4;
        if body_len != intercept_offset + 4 {
            return Err(SaborError::FormatError {
                message: format!("file too short for {n_coefficients} coefficients"),
            });
        }

        let coefficients = data[coef_offset..intercept_offset]
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();

        let intercept = f32::from_le_bytes([
            data[intercept_offset],
            data[intercept_offset + 1],
            data[intercept_offset + 2],
            data[intercept_offset + 3],
        ]);

        Ok(Self {
            metadata,
            coefficients,
            intercept,
        })
    }

    /// Coefficient payload.
    #[must_use]
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Intercept term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Looks up a metadata key.
    #[must_use]
    pub fn get_metadata(&self, key: &str) -> Option<&JsonValue> {
        self.metadata.get(key)
    }
}

/// CRC32 (IEEE polynomial), bitwise form.
fn crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_writer() -> SbrWriter {
        let mut writer = SbrWriter::new();
        writer.set_metadata("model_name", json!("rating-ols"));
        writer.set_metadata("n_features", json!(3));
        writer.set_coefficients(&[1.5, -0.25, 0.0]);
        writer.set_intercept(4.1);
        writer
    }

    // =========================================================================
    // Round-Trip Tests
    // =========================================================================

    #[test]
    fn test_round_trip() {
        let bytes = sample_writer().to_bytes().unwrap();
        let reader = SbrReader::from_bytes(bytes).unwrap();

        assert_eq!(reader.coefficients(), &[1.5, -0.25, 0.0]);
        assert_eq!(reader.intercept(), 4.1);
        assert_eq!(reader.get_metadata("model_name"), Some(&json!("rating-ols")));
        assert_eq!(reader.get_metadata("n_features"), Some(&json!(3)));
    }

    #[test]
    fn test_empty_writer_round_trips() {
        let bytes = SbrWriter::new().to_bytes().unwrap();
        let reader = SbrReader::from_bytes(bytes).unwrap();
        assert!(reader.coefficients().is_empty());
        assert_eq!(reader.intercept(), 0.0);
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.sbr");

        sample_writer().save(&path).unwrap();
        let reader = SbrReader::open(&path).unwrap();
        assert_eq!(reader.coefficients().len(), 3);
    }

    #[test]
    fn test_magic_leads_the_file() {
        let bytes = sample_writer().to_bytes().unwrap();
        assert_eq!(&bytes[0..4], b"SBR1");
    }

    // =========================================================================
    // Corruption Tests
    // =========================================================================

    #[test]
    fn test_bad_magic_rejected() {
        let mut bytes = sample_writer().to_bytes().unwrap();
        bytes[0] = b'X';
        let err = SbrReader::from_bytes(bytes).unwrap_err();
        assert!(matches!(err, SaborError::FormatError { .. }));
    }

    #[test]
    fn test_truncated_file_rejected() {
        let err = SbrReader::from_bytes(b"SBR1".to_vec()).unwrap_err();
        assert!(matches!(err, SaborError::FormatError { .. }));
    }

    #[test]
    fn test_flipped_payload_byte_fails_checksum() {
        let mut bytes = sample_writer().to_bytes().unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;
        let err = SbrReader::from_bytes(bytes).unwrap_err();
        assert!(matches!(err, SaborError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_crc32_known_vector() {
        // IEEE CRC32 of "123456789".
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }
}
