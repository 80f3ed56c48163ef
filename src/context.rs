use crate::config::{Config, Paths};
use crate::error::Result;
use crate::model::Model;
use crate::models::ModelStore;
use crate::platform::Platform;
use crate::todo::TodoStore;

/// Iteration cap for autonomous runs.
pub const MAX_ITERATIONS: u32 = 20;

/// State every command handler receives explicitly.
///
/// Holds the selected model; there is no other place it lives.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub paths: Paths,
    pub config: Config,
    pub platform: Platform,
    pub max_iterations: u32,
}

impl SessionContext {
    /// Prepare the per-user directory tree and load the config.
    ///
    /// On first run the default config is written to disk.
    pub fn init(paths: Paths) -> Result<Self> {
        paths.ensure_dirs()?;

        let config_file = paths.config_file();
        let mut config = Config::load(&config_file);
        if !config_file.exists() {
            if let Err(e) = config.save(&config_file) {
                tracing::warn!("Could not write {}: {}", config_file.display(), e);
            }
        }

        Ok(Self {
            paths,
            config,
            platform: Platform::current(),
            max_iterations: MAX_ITERATIONS,
        })
    }

    /// Context rooted at `~/.c9ai`.
    pub fn from_home() -> Result<Self> {
        Self::init(Paths::from_home()?)
    }

    pub fn model(&self) -> Model {
        self.config.default_model
    }

    /// Select `model` and persist it, replacing the previous choice.
    pub fn set_model(&mut self, model: Model) -> Result<()> {
        self.config.default_model = model;
        self.config.save(&self.paths.config_file())
    }

    pub fn model_store(&self) -> ModelStore {
        ModelStore::new(self.paths.models_dir())
    }

    /// `todo.md` in the current working directory (follows `!cd`).
    pub fn todo_store(&self) -> Result<TodoStore> {
        TodoStore::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::new(dir.path().join(".c9ai"));
        let ctx = SessionContext::init(paths.clone()).unwrap();

        assert_eq!(ctx.model(), Model::Claude);
        assert!(paths.config_file().exists());
        assert!(paths.tools_dir().is_dir());
    }

    #[test]
    fn test_set_model_persists() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::new(dir.path().join(".c9ai"));
        let mut ctx = SessionContext::init(paths.clone()).unwrap();

        ctx.set_model(Model::Local).unwrap();

        let reloaded = SessionContext::init(paths).unwrap();
        assert_eq!(reloaded.model(), Model::Local);
    }
}
