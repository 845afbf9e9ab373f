//! Best-effort UTF-8 decoding for raw journal bytes.
//!
//! Journal entries arrive as opaque byte blobs from whatever storage
//! mechanism triggered the run. Encoding is not guaranteed, so decoding is
//! lossy: malformed byte sequences are skipped entirely rather than
//! replaced or treated as a failure.

/// Decode raw bytes into a String, silently dropping malformed sequences.
///
/// Unlike `String::from_utf8_lossy`, invalid bytes do not leave a
/// replacement character behind; they simply disappear. Valid content on
/// either side of a bad sequence is preserved.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or(""));

                // error_len is None when the input ends mid-sequence
                let skip = err.error_len().unwrap_or(after.len());
                rest = &after[skip.min(after.len())..];
                if rest.is_empty() {
                    break;
                }
            }
        }
    }

    out
}
