//! The session state machine.
//!
//! An iterative loop over an enum-tagged state with a single transition
//! function, so every transition can be exercised on its own. The
//! directory is rebuilt on every entry into the main menu; the operator
//! always acts on a settled, post-action view of the fleet. Exactly one
//! prompt or one gateway call is outstanding at any time.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use fanctl_core::{Directory, Fan, FanService};

use crate::error::CliError;
use crate::label::Choice;
use crate::menu::{self, FanAction};
use crate::prompt::Prompt;

/// Which two-step sub-menu is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMenuKind {
    SetCurrentSpeed,
    UpdateName,
    UpdateSpeeds,
}

/// Session state. `Terminated` is the only terminal state, reached only
/// by choosing `Quit` in the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    MainMenu,
    FanMenu(Fan),
    SubMenu(Fan, SubMenuKind),
    Terminated,
}

/// One interactive console run, from first main menu to `Quit`.
pub struct Session<S, P> {
    service: S,
    prompt: P,
}

impl<S: FanService, P: Prompt> Session<S, P> {
    pub fn new(service: S, prompt: P) -> Self {
        Self { service, prompt }
    }

    /// Drive the state machine until it terminates. Any prompt or
    /// gateway failure ends the run and bubbles to the caller.
    pub async fn run(&self) -> Result<(), CliError> {
        let mut state = State::MainMenu;
        loop {
            match state {
                State::Terminated => return Ok(()),
                current => state = self.step(current).await?,
            }
        }
    }

    /// Perform exactly one transition from `state`.
    pub async fn step(&self, state: State) -> Result<State, CliError> {
        debug!(?state, "transition");
        match state {
            State::MainMenu => self.main_menu().await,
            State::FanMenu(fan) => self.fan_menu(fan).await,
            State::SubMenu(fan, kind) => self.sub_menu(fan, kind).await,
            State::Terminated => Ok(State::Terminated),
        }
    }

    async fn main_menu(&self) -> Result<State, CliError> {
        let directory = self.load_directory().await?;

        match menu::main_menu(&self.prompt, &directory).await? {
            Choice::Quit => Ok(State::Terminated),
            Choice::Refresh => Ok(State::MainMenu),
            Choice::Fan(fan) => Ok(State::FanMenu(fan)),
        }
    }

    async fn fan_menu(&self, fan: Fan) -> Result<State, CliError> {
        match menu::fan_menu(&self.prompt).await? {
            FanAction::TurnOn => {
                self.service.turn_on(&fan.id).await?;
                Ok(State::MainMenu)
            }
            FanAction::TurnOff => {
                self.service.turn_off(&fan.id).await?;
                Ok(State::MainMenu)
            }
            FanAction::SetCurrentSpeed => Ok(State::SubMenu(fan, SubMenuKind::SetCurrentSpeed)),
            FanAction::UpdateName => Ok(State::SubMenu(fan, SubMenuKind::UpdateName)),
            FanAction::UpdateSpeeds => Ok(State::SubMenu(fan, SubMenuKind::UpdateSpeeds)),
            FanAction::BackToMenu => Ok(State::MainMenu),
        }
    }

    /// Ask the sub-menu's one question, issue its one gateway call,
    /// hand control back to the main menu.
    async fn sub_menu(&self, fan: Fan, kind: SubMenuKind) -> Result<State, CliError> {
        match kind {
            SubMenuKind::SetCurrentSpeed => {
                let tier = menu::choose_speed(&self.prompt, &fan).await?;
                self.service.set_current_speed(&fan.id, tier).await?;
            }
            SubMenuKind::UpdateName => {
                let name = menu::ask_name(&self.prompt).await?;
                self.service.update_name(&fan.id, &name).await?;
            }
            SubMenuKind::UpdateSpeeds => {
                let count = menu::choose_speed_count(&self.prompt).await?;
                self.service.update_speed_count(&fan.id, count).await?;
            }
        }
        Ok(State::MainMenu)
    }

    async fn load_directory(&self) -> Result<Directory, CliError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Loading fans...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = self.service.load_directory().await;
        spinner.finish_and_clear();

        Ok(result?)
    }
}
