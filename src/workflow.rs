use crate::agents::{GoToolchainAgent, SelectionPrompt};
use crate::error::Result;
use crate::updates::{
    UpdateOptions, UpgradeCandidate, collect_candidates, decode_module_stream, resolve_selection,
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Run one `updates` invocation end to end
///
/// Obtains the module report, filters it to upgrade candidates, then
/// either lists them or walks the interactive select/resolve/apply path.
pub fn execute_updates(options: &UpdateOptions) -> Result<()> {
    println!("{}", "Searching for module updates...".cyan().bold());

    let toolchain = GoToolchainAgent::new();
    let raw = toolchain.list_modules()?;

    let candidates = collect_candidates(decode_module_stream(&raw), options)?;

    if candidates.is_empty() {
        println!("\n{}", "No updates available!".green());
        return Ok(());
    }

    let descriptors: Vec<String> = candidates.iter().map(|c| c.descriptor()).collect();

    if !options.interactive {
        print!("{}", render_listing(&descriptors));
        return Ok(());
    }

    let chosen = SelectionPrompt::new().choose(&descriptors)?;
    if chosen.is_empty() {
        println!("{}", "Nothing selected.".dimmed());
        return Ok(());
    }

    let resolved = resolve_selection(&candidates, &chosen)?;
    apply_upgrades(&toolchain, &resolved, options)?;

    println!(
        "\n{}",
        format!("✓ Applied {} update(s)", resolved.len())
            .green()
            .bold()
    );
    Ok(())
}

/// Non-interactive report body: one bulleted line per update.
fn render_listing(descriptors: &[String]) -> String {
    let mut out = String::from("\n");
    for descriptor in descriptors {
        out.push_str("* ");
        out.push_str(descriptor);
        out.push('\n');
    }
    out
}

/// Apply the resolved upgrades one at a time, in resolution order.
///
/// The first failure aborts the remaining upgrades; already-applied ones
/// are committed external state and are not rolled back.
fn apply_upgrades(
    toolchain: &GoToolchainAgent,
    resolved: &[&UpgradeCandidate],
    options: &UpdateOptions,
) -> Result<()> {
    let pb = ProgressBar::new(resolved.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  [{bar:40}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    for candidate in resolved {
        pb.println(format!(
            "Updating {} to {}",
            candidate.module_path.white().bold(),
            candidate.target_version.green()
        ));
        pb.set_message(format!(
            "{}@{}",
            candidate.module_path, candidate.target_version
        ));

        let output =
            toolchain.apply_upgrade(&candidate.module_path, &candidate.target_version)?;
        if options.verbose && !output.is_empty() {
            pb.println(String::from_utf8_lossy(&output).trim_end().to_string());
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(())
}
