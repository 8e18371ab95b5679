//! Plain-text output for terminal use. `--json` bypasses this module.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use board::{Board, WorkItem};
use viewport::consts::RESERVED_4K_WIDTH;
use viewport::{Tier, ViewportDescriptor};

pub fn item_line(item: &WorkItem) -> String {
    format!("#{:<5} {:<12} {:<8} {}", item.id, item.status.as_wire(), item.priority.as_wire(), item.title)
}

pub fn item_list(items: &[WorkItem]) -> String {
    if items.is_empty() {
        return "no cases".to_owned();
    }
    items.iter().map(item_line).collect::<Vec<_>>().join("\n")
}

pub fn board_columns(board: &Board) -> String {
    let mut lines = Vec::new();
    for (status, items) in board.columns() {
        lines.push(format!("{} ({})", status.as_wire(), items.len()));
        lines.extend(
            items
                .iter()
                .map(|item| format!("  #{:<5} {:<8} {}", item.id, item.priority.as_wire(), item.title)),
        );
    }
    lines.join("\n")
}

pub fn item_detail(item: &WorkItem) -> String {
    let mut out = item_line(item);
    out.push_str(&format!("\ncreated {}", item.created_at));
    if let Some(owner) = item.owner_id {
        out.push_str(&format!(" by user {owner}"));
    }
    let description = item.description.trim();
    if !description.is_empty() {
        out.push_str("\n\n");
        out.push_str(description);
    }
    if !item.comments.is_empty() {
        out.push_str(&format!("\n\ncomments ({}):", item.comments.len()));
        for comment in &item.comments {
            out.push_str(&format!("\n  [{}] {}", comment.created_at, comment.text));
        }
    }
    out
}

pub fn descriptor(d: &ViewportDescriptor) -> String {
    format!(
        "{}x{} -> {} ({}), scale {}, font x{}",
        d.width(),
        d.height(),
        d.breakpoint(),
        d.tier().label(),
        d.scale(),
        d.tier().font_multiplier()
    )
}

pub fn breakpoints() -> String {
    let mut lines = vec![format!("{:<12} {:>7} {:>6} {:>5}", "tier", "min px", "scale", "font")];
    lines.extend(Tier::ALL.into_iter().map(|tier| {
        format!(
            "{:<12} {:>7} {:>6} {:>5}",
            tier.name(),
            tier.threshold(),
            tier.scale(),
            tier.font_multiplier()
        )
    }));
    lines.push(String::new());
    lines.push(format!("{RESERVED_4K_WIDTH}px (native 4K) stays in fourK; classification follows the table."));
    lines.join("\n")
}
