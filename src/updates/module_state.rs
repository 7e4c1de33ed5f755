use crate::error::{ModupError, Result};
use serde::Deserialize;

/// A newer version reported for a module
///
/// `time` is the publication timestamp of the newer version. The Go
/// toolchain omits it (or leaves it empty) when it could not establish
/// that an update actually exists, so an empty `time` means "no update
/// known" even if a version string is present.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AvailableUpdate {
    #[serde(rename = "Path", default)]
    pub path: Option<String>,

    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "Time", default)]
    pub time: Option<String>,
}

/// One record from the `go list -u -m -json all` report
///
/// The report is a stream of concatenated JSON objects, one per module
/// in the build list, including the main module itself.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModuleState {
    #[serde(rename = "Path")]
    pub path: String,

    /// Empty for the main module, which carries no version of its own.
    #[serde(rename = "Version", default)]
    pub version: String,

    #[serde(rename = "Time", default)]
    pub time: Option<String>,

    #[serde(rename = "Indirect", default)]
    pub indirect: bool,

    #[serde(rename = "Main", default)]
    pub main: bool,

    #[serde(rename = "Update", default)]
    pub update: Option<AvailableUpdate>,
}

impl ModuleState {
    /// The reported update, if the toolchain confirmed one exists.
    ///
    /// An `Update` block without a publication time is not a confirmed
    /// update and is treated as absent.
    pub fn known_update(&self) -> Option<&AvailableUpdate> {
        self.update
            .as_ref()
            .filter(|u| u.time.as_deref().is_some_and(|t| !t.is_empty()))
    }
}

/// Lazily decode the concatenated-JSON module report
///
/// Records are decoded one at a time, in stream order. A malformed record
/// surfaces as `ModupError::MalformedRecord`; iteration must not continue
/// past the first error. End of input terminates the iterator cleanly.
pub fn decode_module_stream(raw: &[u8]) -> impl Iterator<Item = Result<ModuleState>> + '_ {
    serde_json::Deserializer::from_slice(raw)
        .into_iter::<ModuleState>()
        .map(|record| record.map_err(ModupError::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_concatenated_records_in_order() {
        let raw = br#"
            {"Path": "example.com/a", "Version": "v1.0.0", "Main": true}
            {"Path": "example.com/b", "Version": "v2.0.0", "Indirect": true}
            {"Path": "example.com/c", "Version": "v0.1.0",
             "Update": {"Path": "example.com/c", "Version": "v0.2.0", "Time": "2024-01-01T00:00:00Z"}}
        "#;

        let records: Vec<ModuleState> = decode_module_stream(raw)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].path, "example.com/a");
        assert!(records[0].main);
        assert!(records[0].known_update().is_none());
        assert!(records[1].indirect);
        assert_eq!(records[2].update.as_ref().unwrap().version, "v0.2.0");
        assert!(records[2].known_update().is_some());
    }

    #[test]
    fn empty_stream_yields_nothing() {
        assert_eq!(decode_module_stream(b"").count(), 0);
        assert_eq!(decode_module_stream(b"   \n  ").count(), 0);
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw = br#"{"Path": "example.com/m", "Version": "v1.0.0"}"#;
        let record = decode_module_stream(raw).next().unwrap().unwrap();
        assert!(!record.main);
        assert!(!record.indirect);
        assert!(record.update.is_none());
        assert!(record.time.is_none());
    }

    #[test]
    fn empty_update_time_is_not_a_known_update() {
        let raw = br#"
            {"Path": "example.com/m", "Version": "v1.0.0",
             "Update": {"Version": "v1.1.0", "Time": ""}}
        "#;
        let record = decode_module_stream(raw).next().unwrap().unwrap();
        assert!(record.known_update().is_none());
    }

    #[test]
    fn malformed_record_fails_without_discarding_prior_records() {
        let raw = br#"
            {"Path": "example.com/a", "Version": "v1.0.0"}
            {"Path": 42}
            {"Path": "example.com/c", "Version": "v3.0.0"}
        "#;

        let mut stream = decode_module_stream(raw);
        assert!(stream.next().unwrap().is_ok());
        let err = stream.next().unwrap().unwrap_err();
        assert!(matches!(err, ModupError::MalformedRecord(_)));
    }
}
