//! Terminal rendering of the progress read model. Presentation only; the
//! sequencer never depends on anything here.

use crate::sequencer::ProgressSnapshot;
use crate::stages::StageCatalog;

/// Numbered listing of the configured catalog.
pub fn render_catalog(catalog: &StageCatalog) -> String {
    let mut output = String::new();
    output.push_str("📋 CONFIGURED DEPLOYMENT STAGES:\n");
    output.push_str("────────────────────────────────\n");
    for (index, stage) in catalog.iter().enumerate() {
        output.push_str(&format!("{:>2}. {} {}\n", index + 1, stage.icon, stage.label));
    }
    output
}

/// Full timeline view: past stages checked, current stage spinning, future
/// stages pending. Once done, every stage is checked.
pub fn render_timeline(catalog: &StageCatalog, snapshot: &ProgressSnapshot) -> String {
    let mut output = String::new();
    for (index, stage) in catalog.iter().enumerate() {
        let marker = if snapshot.done || index < snapshot.current_index {
            "✅"
        } else if index == snapshot.current_index {
            "🔄"
        } else {
            "⬜"
        };
        output.push_str(&format!("{} {} {}\n", marker, stage.icon, stage.label));
    }
    output
}

/// One-line status: the running step counter, or the completion headline.
pub fn render_status_line(catalog: &StageCatalog, snapshot: &ProgressSnapshot) -> String {
    if snapshot.done {
        return "🎉 Deployment Complete!".to_string();
    }
    match catalog.get(snapshot.current_index) {
        Some(stage) => format!(
            "🚚 Step {} / {}: {} {}",
            snapshot.current_index + 1,
            catalog.len(),
            stage.icon,
            stage.label
        ),
        None => format!("🚚 Step {} / {}", snapshot.current_index + 1, catalog.len()),
    }
}

/// The celebratory completion card. Present exactly while `done` holds,
/// absent otherwise (mount/unmount tied 1:1 to the flag).
pub fn render_completion_card(snapshot: &ProgressSnapshot) -> Option<String> {
    if !snapshot.overlay_visible() {
        return None;
    }
    let tracking = snapshot.tracking_id.as_deref().unwrap_or("unknown");
    let mut output = String::new();
    output.push_str("🎊 🎉 🎊 🎉 🎊 🎉 🎊 🎉 🎊\n");
    output.push_str("   DEPLOYMENT COMPLETE!\n");
    output.push_str(&format!("   Tracking Number: #{tracking}\n"));
    output.push_str("   Your app is live, secure, and approved.\n");
    output.push_str("🎊 🎉 🎊 🎉 🎊 🎉 🎊 🎉 🎊\n");
    Some(output)
}
