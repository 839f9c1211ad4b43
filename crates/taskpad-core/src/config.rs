use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info
};

pub const DEFAULT_STORAGE_KEY: &str =
  "tasks";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Config {
  pub storage_key:       String,
  pub empty_description: String,
  pub labels:            Labels
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Labels {
  pub add_heading:   String,
  pub edit_heading:  String,
  pub save_button:   String,
  pub update_button: String
}

impl Default for Config {
  fn default() -> Self {
    Self {
      storage_key:       DEFAULT_STORAGE_KEY
        .to_string(),
      empty_description:
        "No description".to_string(),
      labels:            Labels::default()
    }
  }
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      add_heading:   "Add New Task"
        .to_string(),
      edit_heading:  "Edit Task"
        .to_string(),
      save_button:   "Save Task"
        .to_string(),
      update_button: "Update Task"
        .to_string()
    }
  }
}

impl Config {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let cfg: Config =
      toml::from_str(raw).context(
        "failed to parse taskpad \
         config"
      )?;
    if cfg.storage_key.trim().is_empty()
    {
      anyhow::bail!(
        "storage_key cannot be empty"
      );
    }
    Ok(cfg)
  }

  /// Parses a bundled config, logging
  /// and falling back to defaults when
  /// it is unusable.
  #[tracing::instrument(skip(raw))]
  pub fn load_embedded(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => {
        info!(
          storage_key = %cfg.storage_key,
          "loaded taskpad config"
        );
        cfg
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "invalid taskpad config; using defaults");
        Self::default()
      }
    }
  }
}
