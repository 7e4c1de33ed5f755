use crate::error::{ModupError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// GoToolchainAgent runs the Go toolchain commands the tool depends on
///
/// Two commands are ever issued: `go list -u -m -json all` to obtain the
/// module report, and `go get` to apply one chosen upgrade. Both block
/// until the toolchain finishes; there is no timeout, matching a
/// foreground developer tool.
pub struct GoToolchainAgent {
    go_binary: PathBuf,
}

impl GoToolchainAgent {
    pub fn new() -> Self {
        Self::with_binary("go")
    }

    /// Use a specific `go` executable instead of resolving via PATH.
    pub fn with_binary<P: AsRef<Path>>(go_binary: P) -> Self {
        Self {
            go_binary: go_binary.as_ref().to_path_buf(),
        }
    }

    /// Produce the raw module report bytes for the current project.
    pub fn list_modules(&self) -> Result<Vec<u8>> {
        let output = Command::new(&self.go_binary)
            .args(["list", "-u", "-m", "-json", "all"])
            .output()
            .map_err(|e| {
                ModupError::ReportUnavailable(format!(
                    "failed to run {}: {}",
                    self.go_binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(ModupError::ReportUnavailable(format!(
                "go list exited with {}: {}",
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(output.stdout)
    }

    /// Apply one upgrade via `go get module@version`.
    ///
    /// Returns the toolchain's combined captured stdout for optional
    /// verbose display. A nonzero exit is fatal; the caller stops the run.
    pub fn apply_upgrade(&self, module_path: &str, target_version: &str) -> Result<Vec<u8>> {
        let target = format!("{}@{}", module_path, target_version);

        let output = Command::new(&self.go_binary)
            .args(["get", "-v", &target])
            .output()
            .map_err(|e| {
                ModupError::UpgradeFailed(format!(
                    "failed to run {} get {}: {}",
                    self.go_binary.display(),
                    target,
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(ModupError::UpgradeFailed(format!(
                "go get {} exited with {}: {}",
                target,
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(output.stdout)
    }
}

impl Default for GoToolchainAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::tempdir;

    fn fake_go(dir: &Path, script: &str) -> GoToolchainAgent {
        let path = dir.join("go");
        fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        GoToolchainAgent::with_binary(&path)
    }

    #[test]
    fn list_modules_captures_stdout() {
        let dir = tempdir().unwrap();
        let agent = fake_go(dir.path(), r#"echo '{"Path": "example.com/a", "Version": "v1.0.0"}'"#);

        let raw = agent.list_modules().unwrap();
        assert!(raw.starts_with(b"{\"Path\""));
    }

    #[test]
    fn failing_report_is_report_unavailable() {
        let dir = tempdir().unwrap();
        let agent = fake_go(dir.path(), "echo 'no go.mod' >&2; exit 1");

        let err = agent.list_modules().unwrap_err();
        assert!(matches!(err, ModupError::ReportUnavailable(_)));
        assert!(err.to_string().contains("no go.mod"));
    }

    #[test]
    fn missing_binary_is_report_unavailable() {
        let dir = tempdir().unwrap();
        let agent = GoToolchainAgent::with_binary(dir.path().join("missing"));
        assert!(matches!(
            agent.list_modules().unwrap_err(),
            ModupError::ReportUnavailable(_)
        ));
    }

    #[test]
    fn apply_upgrade_addresses_module_at_version() {
        let dir = tempdir().unwrap();
        // The fake toolchain echoes its arguments back.
        let agent = fake_go(dir.path(), r#"echo "$@""#);

        let output = agent.apply_upgrade("example.com/z", "v1.1.0").unwrap();
        assert_eq!(
            String::from_utf8_lossy(&output).trim(),
            "get -v example.com/z@v1.1.0"
        );
    }

    #[test]
    fn failing_upgrade_is_upgrade_failed() {
        let dir = tempdir().unwrap();
        let agent = fake_go(dir.path(), "exit 2");

        let err = agent.apply_upgrade("example.com/z", "v1.1.0").unwrap_err();
        assert!(matches!(err, ModupError::UpgradeFailed(_)));
    }
}
