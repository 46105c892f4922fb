//! The "ask one question, get one answer" boundary.
//!
//! Every prompt is a single cooperative suspension point: the session
//! loop awaits exactly one outstanding question at a time. The terminal
//! implementation drives `dialoguer` inside `spawn_blocking` so the
//! async runtime is never blocked on the keyboard.

use async_trait::async_trait;

use crate::error::CliError;

/// One-question prompt boundary.
#[async_trait]
pub trait Prompt: Send + Sync {
    /// Show a list prompt; resolves to the index of the chosen item.
    async fn select(&self, message: &str, items: Vec<String>) -> Result<usize, CliError>;

    /// Show a free-text prompt; resolves to the entered line.
    async fn input(&self, message: &str) -> Result<String, CliError>;
}

/// Production prompt backed by `dialoguer` on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermPrompt;

impl TermPrompt {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompt for TermPrompt {
    async fn select(&self, message: &str, items: Vec<String>) -> Result<usize, CliError> {
        let message = message.to_owned();
        tokio::task::spawn_blocking(move || {
            dialoguer::Select::new()
                .with_prompt(message)
                .items(&items)
                .default(0)
                .interact()
                .map_err(prompt_error)
        })
        .await
        .map_err(join_error)?
    }

    async fn input(&self, message: &str) -> Result<String, CliError> {
        let message = message.to_owned();
        tokio::task::spawn_blocking(move || {
            dialoguer::Input::<String>::new()
                .with_prompt(message)
                .interact_text()
                .map_err(prompt_error)
        })
        .await
        .map_err(join_error)?
    }
}

fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::Prompt {
        message: err.to_string(),
    }
}

fn join_error(err: tokio::task::JoinError) -> CliError {
    CliError::Prompt {
        message: format!("prompt task failed: {err}"),
    }
}
