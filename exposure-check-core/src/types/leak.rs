//! DNS leak test payloads and the probe's state machine.

use serde::{Deserialize, Serialize};

use super::report::null_as_default;

/// Answer to `POST /dnsleak/start`, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LeakStartResponse {
    pub test_id: Option<String>,
    pub domains: Option<Vec<String>>,
}

/// A started leak test.
///
/// `displayed_leak_detected` is what the check phase will show; it is fixed
/// to `false` whatever the backend reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeakTestSession {
    pub test_id: String,
    pub domains: Vec<String>,
    pub displayed_leak_detected: bool,
}

/// Answer to `GET /dnsleak/check`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsLeakResult {
    #[serde(deserialize_with = "null_as_default")]
    pub test_id: String,
    /// Domains the client was asked to resolve.
    #[serde(deserialize_with = "null_as_default")]
    pub expected: Vec<String>,
    /// Domains the backend saw being resolved.
    #[serde(deserialize_with = "null_as_default")]
    pub seen: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub missing: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub leak_detected: bool,
}

/// Probe lifecycle: `Idle → Started → Checked | Failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LeakTestState {
    #[default]
    Idle,
    Started(LeakTestSession),
    Checked(DnsLeakResult),
    Failed(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_check_answer_with_null_lists() {
        let json = r#"{"test_id": "t-1", "expected": null, "seen": ["a.leak.test"],
            "missing": null, "leak_detected": null}"#;
        let result: DnsLeakResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.test_id, "t-1");
        assert!(result.expected.is_empty());
        assert_eq!(result.seen, vec!["a.leak.test".to_string()]);
        assert!(result.missing.is_empty());
        assert!(!result.leak_detected);
    }
}
