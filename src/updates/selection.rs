use crate::error::{ModupError, Result};
use crate::updates::filter::UpgradeCandidate;

/// Map chosen descriptor lines back to the candidates that produced them
///
/// The candidate list from this run is the source of truth: each chosen
/// line is matched by exact equality against every candidate's descriptor,
/// and every match is resolved. Duplicate report records for one module
/// path therefore all get upgraded, which mirrors the no-dedup filter.
///
/// A line that matches no candidate means the offered list and the chosen
/// list have diverged; that is a bug somewhere upstream and surfaces as
/// `SelectionMismatch` instead of being dropped silently.
pub fn resolve_selection<'a>(
    candidates: &'a [UpgradeCandidate],
    chosen: &[String],
) -> Result<Vec<&'a UpgradeCandidate>> {
    let mut resolved = Vec::with_capacity(chosen.len());

    for line in chosen {
        let before = resolved.len();
        resolved.extend(
            candidates
                .iter()
                .filter(|candidate| candidate.descriptor() == *line),
        );
        if resolved.len() == before {
            return Err(ModupError::SelectionMismatch(line.clone()));
        }
    }

    Ok(resolved)
}
