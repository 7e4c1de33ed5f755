use crate::error::Result;
use crate::updates::module_state::ModuleState;
use std::fmt;

/// Options for one `updates` run
///
/// Built once from the CLI and passed by reference wherever behavior
/// depends on it. No process-wide flag state exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Offer an interactive selection instead of listing updates
    pub interactive: bool,
    /// Skip modules that are not direct dependencies
    pub direct_only: bool,
    /// Print extra diagnostics
    pub verbose: bool,
}

/// One reportable upgrade, derived from a qualifying module record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeCandidate {
    pub module_path: String,
    pub current_version: String,
    pub target_version: String,
}

impl UpgradeCandidate {
    /// The line offered to the user for this candidate.
    ///
    /// Selection is resolved by exact equality against this string, never
    /// by parsing it, so module paths containing spaces or version-like
    /// tokens cannot confuse resolution.
    pub fn descriptor(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UpgradeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.module_path, self.current_version, self.target_version
        )
    }
}

/// Filter decoded module records down to upgrade candidates
///
/// Rules, applied per record in stream order:
/// - the main module is never a candidate
/// - in direct-only mode, indirect dependencies are never candidates
/// - a record without a confirmed update (empty/absent `Update.Time`) is
///   never a candidate
///
/// Order is preserved and duplicates are not collapsed: if the toolchain
/// emits two records for one module path, both surface as candidates.
/// The first malformed record aborts the whole collection.
pub fn collect_candidates<I>(records: I, options: &UpdateOptions) -> Result<Vec<UpgradeCandidate>>
where
    I: IntoIterator<Item = Result<ModuleState>>,
{
    let mut candidates = Vec::new();

    for record in records {
        let state = record?;

        if state.main {
            continue;
        }
        if options.direct_only && state.indirect {
            continue;
        }
        let Some(update) = state.known_update() else {
            continue;
        };

        candidates.push(UpgradeCandidate {
            module_path: state.path.clone(),
            current_version: state.version.clone(),
            target_version: update.version.clone(),
        });
    }

    if options.verbose {
        println!("Found {} modules with updates", candidates.len());
        for candidate in &candidates {
            println!("  {}", candidate);
        }
    }

    Ok(candidates)
}
