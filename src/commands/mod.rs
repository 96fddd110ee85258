//! Command handlers. Each returns a [`Rendered`] result; printing is left to
//! the caller so handlers stay testable.

mod format;
pub mod item;
pub mod outfit;
pub mod photo;
pub mod plan;
pub mod stats;
pub mod suggest;

use serde::Serialize;
use thiserror::Error;
use wd_app::WardrobeStore;

use crate::bootstrap::AppDeps;
use crate::cli::Commands;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("no {kind} with id {id:?}")]
    NotFound { kind: &'static str, id: String },
}

pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> anyhow::Error {
    CommandError::NotFound {
        kind,
        id: id.into(),
    }
    .into()
}

/// Command result in both machine and human form.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub value: serde_json::Value,
    pub text: String,
}

impl Rendered {
    pub fn new<T: Serialize + ?Sized>(value: &T, text: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            value: serde_json::to_value(value)?,
            text: text.into(),
        })
    }

    pub fn to_output(&self, json: bool) -> anyhow::Result<String> {
        if json {
            Ok(serde_json::to_string_pretty(&self.value)?)
        } else {
            Ok(self.text.clone())
        }
    }
}

pub async fn dispatch(
    command: Commands,
    store: &mut WardrobeStore,
    deps: &AppDeps,
) -> anyhow::Result<Rendered> {
    match command {
        Commands::Item(command) => item::run(command, store, deps).await,
        Commands::Outfit(command) => outfit::run(command, store).await,
        Commands::Plan(command) => plan::run(command, store).await,
        Commands::Photo(command) => photo::run(command, store).await,
        Commands::Suggest(args) => suggest::run(args, store, deps).await,
        Commands::Stats => stats::run(store),
    }
}
