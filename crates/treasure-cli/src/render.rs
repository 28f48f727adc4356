//! Plain-text rendering of story entries and run summaries.

use std::io::{self, Write};

use treasure_core::story::{EntryKind, StoryEntry};
use treasure_narrative::application::progress::ProgressView;
use treasure_narrative::application::result::RunResult;
use treasure_narrative::domain::items::icon_for;
use treasure_narrative::domain::stages::{Stage, progress_percent};

/// Writes one entry as it arrives.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_entry(out: &mut impl Write, entry: &StoryEntry) -> io::Result<()> {
    match entry.kind() {
        EntryKind::Start => writeln!(out, "{}", entry.text()),
        EntryKind::Stage => writeln!(
            out,
            "\n[{}/{} {:>3}%] {}",
            entry.stage(),
            Stage::COUNT,
            progress_percent(entry.stage()),
            entry.text()
        ),
        EntryKind::Story => writeln!(out, "  {}", entry.text()),
        EntryKind::Victory | EntryKind::Error => writeln!(out, "\n{}", entry.text()),
    }
}

/// Writes the closing summary of a run.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_summary(out: &mut impl Write, result: &RunResult) -> io::Result<()> {
    let view = ProgressView::from_result(result);

    writeln!(out)?;
    writeln!(out, "状态: {}", view.status.label())?;
    match view.stage_title {
        Some(title) => writeln!(
            out,
            "阶段: {}/{} ({}%) {title}",
            view.stage,
            Stage::COUNT,
            view.percent
        )?,
        None => writeln!(out, "阶段: 准备开始")?,
    }

    if view.items.is_empty() {
        writeln!(out, "物品 (0 件): 暂无物品")?;
    } else {
        let items: Vec<String> = view
            .items
            .iter()
            .map(|name| format!("{} {name}", icon_for(name)))
            .collect();
        writeln!(out, "物品 ({} 件): {}", view.item_count(), items.join(", "))?;
    }

    if let Some(message) = &result.error_message {
        writeln!(out, "原因: {message}")?;
    }
    Ok(())
}
