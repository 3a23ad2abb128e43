//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Styling goes through `console`, which drops colors when the stream is not a terminal.

use console::style;

use crate::boundary::ReleaseWarning;
use crate::domain::{BumpKind, Version};
use crate::resolver;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal release warning to the user.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!(
        "{} {}",
        style("⚠ WARNING:").yellow().for_stderr(),
        warning
    );
}

/// Display the version change computed by the resolver.
///
/// # Arguments
/// * `previous` - Version currently in the manifest
/// * `next` - The version it will be (or was) changed to
pub fn display_version_change(previous: &Version, next: &Version) {
    println!("\n{}", style("Version change:").bold());
    println!("  From: {}", style(previous).red());
    println!("  To:   {}", style(next).green());
}

/// Display what a dry run would have done.
pub fn display_dry_run(version: &Version, commit: bool, tag: Option<&str>) {
    display_status("Dry run, no changes made:");
    display_success(&format!("  Would write version {} to the manifest", version));
    if commit {
        display_success("  Would commit the manifest");
    }
    if let Some(tag) = tag {
        display_success(&format!("  Would create tag {}", tag));
    }
}

/// Display the command that publishes the updated package.
pub fn display_publish_hint(command_line: &str) {
    println!(
        "\n{} Version update complete. You can now publish with:\n  {}",
        style("→").yellow(),
        style(command_line).cyan()
    );
}

/// Label for a bump kind in the interactive selector.
///
/// Kinds that can be previewed show the version they would produce, e.g.
/// `Prepatch (1.2.4-alpha.0)`.
pub fn bump_choice_label(kind: BumpKind, current: &Version) -> String {
    let name = match kind {
        BumpKind::Patch => "Patch",
        BumpKind::Minor => "Minor",
        BumpKind::Major => "Major",
        BumpKind::PrePatch => "Prepatch",
        BumpKind::PreMinor => "Preminor",
        BumpKind::PreMajor => "Premajor",
        BumpKind::PreRelease => return "Custom Prerelease".to_string(),
        BumpKind::Custom => return "Custom Version".to_string(),
    };

    match resolver::preview(current, kind) {
        Some(next) => format!("{} ({})", name, next),
        None => name.to_string(),
    }
}
