//! The console's menus: main menu, per-fan action menu, and the three
//! two-step sub-menus. Each function asks exactly one question and
//! returns a typed answer; issuing the resulting gateway call is the
//! session's job.

use fanctl_core::{Directory, Fan, SpeedCount, SpeedTier};

use crate::error::CliError;
use crate::label::{self, Choice};
use crate::prompt::Prompt;

// ── Fan action menu ─────────────────────────────────────────────────

/// Actions offered for a selected fan, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanAction {
    TurnOn,
    TurnOff,
    SetCurrentSpeed,
    UpdateName,
    UpdateSpeeds,
    BackToMenu,
}

impl FanAction {
    pub const ALL: [Self; 6] = [
        Self::TurnOn,
        Self::TurnOff,
        Self::SetCurrentSpeed,
        Self::UpdateName,
        Self::UpdateSpeeds,
        Self::BackToMenu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TurnOn => "Turn On",
            Self::TurnOff => "Turn Off",
            Self::SetCurrentSpeed => "Set Current Speed",
            Self::UpdateName => "Update Name",
            Self::UpdateSpeeds => "Update Speeds",
            Self::BackToMenu => "Back To Menu",
        }
    }
}

// ── Menus ───────────────────────────────────────────────────────────

/// Show the main menu for a directory snapshot and resolve the answer.
pub async fn main_menu<P: Prompt + ?Sized>(
    prompt: &P,
    directory: &Directory,
) -> Result<Choice, CliError> {
    let entries = label::build_entries(directory);
    let items = entries.iter().map(|e| e.label.clone()).collect();

    let index = prompt.select("Here are your fans", items).await?;
    let entry = item_at(&entries, index)?;

    Ok(label::resolve(entry, directory))
}

/// Show the fixed action menu for one fan.
pub async fn fan_menu<P: Prompt + ?Sized>(prompt: &P) -> Result<FanAction, CliError> {
    let items = FanAction::ALL.iter().map(|a| a.label().to_owned()).collect();

    let index = prompt.select("What do you want to do?", items).await?;
    item_at(&FanAction::ALL, index).copied()
}

/// Sub-menu: pick a speed tier for the fan.
pub async fn choose_speed<P: Prompt + ?Sized>(
    prompt: &P,
    fan: &Fan,
) -> Result<SpeedTier, CliError> {
    let items = SpeedTier::ALL.iter().map(ToString::to_string).collect();

    let index = prompt
        .select(&format!("What speed for {}", fan.name), items)
        .await?;
    item_at(&SpeedTier::ALL, index).copied()
}

/// Sub-menu: enter a new name for the fan.
pub async fn ask_name<P: Prompt + ?Sized>(prompt: &P) -> Result<String, CliError> {
    prompt.input("What is the new name?").await
}

/// Sub-menu: pick how many speed tiers the fan supports.
pub async fn choose_speed_count<P: Prompt + ?Sized>(prompt: &P) -> Result<SpeedCount, CliError> {
    let items = SpeedCount::ALL.iter().map(ToString::to_string).collect();

    let index = prompt
        .select("How many speeds does this fan have?", items)
        .await?;
    item_at(&SpeedCount::ALL, index).copied()
}

/// A prompt answering with an index it was never shown violates the
/// prompt contract; surface it rather than guessing a choice.
fn item_at<T>(items: &[T], index: usize) -> Result<&T, CliError> {
    items.get(index).ok_or_else(|| CliError::Prompt {
        message: format!("selection index {index} out of range"),
    })
}
