// src/protocol.rs

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Bytes kept verbatim when a command is embedded as a URL path segment:
/// the RFC 3986 unreserved set. Everything else, including `/`, `?`, `#`,
/// whitespace and the other reserved characters, is percent-encoded so that
/// any command string yields a valid single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A single user command ready to be submitted to the execution service.
///
/// Built at dispatch time, immutable, and dropped once the response has been
/// rendered; no history is kept.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    raw: String,
    encoded: String,
}

impl CommandRequest {
    /// Builds a request from user input. Leading and trailing whitespace is
    /// trimmed first; returns `None` when nothing remains, in which case the
    /// caller shows the instructional prompt instead of issuing a request.
    pub fn from_input(input: &str) -> Option<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            encoded: utf8_percent_encode(raw, PATH_SEGMENT).to_string(),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The percent-encoded form used as the final URL path segment.
    pub fn encoded_path(&self) -> &str {
        &self.encoded
    }
}

/// The `{success, message}` envelope returned by both service endpoints.
///
/// `message` carries stdout/result text when `success` is true and diagnostic
/// text when it is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_reserved_characters_are_escaped() {
        let request = CommandRequest::from_input("cat /etc/hosts?x#y z").unwrap();
        let encoded = request.encoded_path();
        for reserved in ['/', '?', '#', ' '] {
            assert!(
                !encoded.contains(reserved),
                "{:?} leaked into path segment {:?}",
                reserved,
                encoded
            );
        }
        assert_eq!(encoded, "cat%20%2Fetc%2Fhosts%3Fx%23y%20z");
    }

    #[test]
    fn test_encoding_round_trips_through_percent_decoding() {
        let inputs = [
            "ls -la /tmp",
            "echo \"hello world\" > /dev/null",
            "grep -r 'a#b?c' . && pwd",
            "printf '%s\\n' über",
        ];
        for input in inputs {
            let request = CommandRequest::from_input(input).unwrap();
            let decoded = percent_decode_str(request.encoded_path())
                .decode_utf8()
                .unwrap();
            assert_eq!(decoded, input);
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let request = CommandRequest::from_input("  uptime \n").unwrap();
        assert_eq!(request.raw(), "uptime");
        assert_eq!(request.encoded_path(), "uptime");
    }

    #[test]
    fn test_empty_and_whitespace_input_is_rejected() {
        assert!(CommandRequest::from_input("").is_none());
        assert!(CommandRequest::from_input("   \t\n").is_none());
    }

    #[test]
    fn test_envelope_decodes_from_service_json() {
        let envelope: ServiceResponse =
            serde_json::from_str(r#"{"success":true,"message":"/home/user"}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, "/home/user");
    }
}
