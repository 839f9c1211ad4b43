use anyhow::anyhow;
use taskpad_core::{
  KvBackend,
  MemoryBackend
};

/// `window.localStorage` when the page
/// has one, otherwise an in-memory map
/// that lives as long as the page.
#[derive(Debug, Clone)]
pub enum BrowserStorage {
  Local(web_sys::Storage),
  Memory(MemoryBackend)
}

impl BrowserStorage {
  pub fn detect() -> Self {
    let storage =
      web_sys::window().and_then(
        |window| {
          window
            .local_storage()
            .ok()
            .flatten()
        }
      );

    match storage {
      | Some(storage) => {
        Self::Local(storage)
      }
      | None => {
        tracing::warn!(
          "localStorage unavailable; \
           tasks will not outlive the \
           page"
        );
        Self::Memory(MemoryBackend::new())
      }
    }
  }
}

impl KvBackend for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    match self {
      | Self::Local(storage) => {
        storage.get_item(key).map_err(
          |error| {
            anyhow!(
              "localStorage read of \
               `{key}` failed: \
               {error:?}"
            )
          }
        )
      }
      | Self::Memory(memory) => {
        memory.get_item(key)
      }
    }
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match self {
      | Self::Local(storage) => storage
        .set_item(key, value)
        .map_err(|error| {
          anyhow!(
            "localStorage write of \
             `{key}` failed: {error:?}"
          )
        }),
      | Self::Memory(memory) => {
        memory.set_item(key, value)
      }
    }
  }
}
