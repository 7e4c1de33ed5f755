// Updates module - the decision logic of the tool
//
// Everything here is pure data transformation over the module report:
// - ModuleState: one decoded record from `go list -u -m -json all`
// - collect_candidates: filters records down to reportable upgrades
// - resolve_selection: maps chosen descriptor lines back to candidates
//
// Subprocess and terminal concerns live in the agents module.
pub mod filter;
pub mod module_state;
pub mod selection;

pub use filter::{UpdateOptions, UpgradeCandidate, collect_candidates};
pub use module_state::{ModuleState, decode_module_stream};
pub use selection::resolve_selection;
