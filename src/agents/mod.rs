pub mod go_toolchain;
pub mod interaction;

pub use go_toolchain::GoToolchainAgent;
pub use interaction::SelectionPrompt;
