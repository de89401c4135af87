//! Audit command: surface activity labels the classifier cannot place.

use anyhow::Result;
use lt_core::{Session, uncategorized_activities};

/// Prints the distinct labels that classify as `other`.
pub fn run(sessions: &[Session], json: bool) -> Result<()> {
    let labels = uncategorized_activities(sessions);

    if json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }

    if labels.is_empty() {
        println!("All activity labels matched a category rule.");
    } else {
        println!("Uncategorized activity labels ({}):", labels.len());
        for label in &labels {
            println!("  {label}");
        }
    }

    Ok(())
}
