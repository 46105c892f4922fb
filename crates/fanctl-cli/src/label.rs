//! Menu labels for fans, and their resolution back to directory entries.
//!
//! Each main-menu row pairs its display label with the originating
//! [`FanId`] at construction time, so identity is never re-derived from
//! the string and two fans that happen to format identically remain
//! distinct choices.

use fanctl_core::{Directory, Fan, FanId};

/// Visual divider between fan rows and the control rows.
pub const SEPARATOR: &str = "────────────";
pub const REFRESH: &str = "Refresh";
pub const QUIT: &str = "Quit";

/// Format a fan's menu label: `"<name> <ON|OFF> <tier> <count> (<id>)"`.
pub fn encode(fan: &Fan) -> String {
    format!(
        "{} {} {} {} ({})",
        fan.name, fan.power, fan.speed, fan.speeds, fan.id
    )
}

/// What a main-menu row stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Fan(FanId),
    Separator,
    Refresh,
    Quit,
}

/// One main-menu row: display label plus resolved identity.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub label: String,
    pub kind: EntryKind,
}

/// What a main-menu selection resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Fan(Fan),
    Refresh,
    Quit,
}

/// Build the full main-menu entry list for a directory snapshot:
/// one row per fan in discovery order, then the separator, then the
/// `Refresh` and `Quit` controls, always last.
pub fn build_entries(directory: &Directory) -> Vec<MenuEntry> {
    let mut entries: Vec<MenuEntry> = directory
        .iter()
        .map(|fan| MenuEntry {
            label: encode(fan),
            kind: EntryKind::Fan(fan.id.clone()),
        })
        .collect();

    entries.push(MenuEntry {
        label: SEPARATOR.into(),
        kind: EntryKind::Separator,
    });
    entries.push(MenuEntry {
        label: REFRESH.into(),
        kind: EntryKind::Refresh,
    });
    entries.push(MenuEntry {
        label: QUIT.into(),
        kind: EntryKind::Quit,
    });

    entries
}

/// Resolve a chosen entry against the directory snapshot it was built
/// from.
///
/// A fan row whose id no longer exists in the directory (a stale choice
/// from a race with a fleet change) resolves to `Refresh` rather than
/// surfacing a missing fan. The separator resolves the same way.
pub fn resolve(entry: &MenuEntry, directory: &Directory) -> Choice {
    match &entry.kind {
        EntryKind::Fan(id) => match directory.get(id) {
            Some(fan) => Choice::Fan(fan.clone()),
            None => Choice::Refresh,
        },
        EntryKind::Separator | EntryKind::Refresh => Choice::Refresh,
        EntryKind::Quit => Choice::Quit,
    }
}
