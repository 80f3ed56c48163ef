/// Model selection persisted through the session context.
use c9ai::config::{Config, Paths};
use c9ai::context::SessionContext;
use c9ai::model::Model;
use tempfile::TempDir;

#[test]
fn test_last_switch_wins() {
    let dir = TempDir::new().unwrap();
    let paths = Paths::new(dir.path().join(".c9ai"));
    let mut ctx = SessionContext::init(paths.clone()).unwrap();

    for model in [Model::Gemini, Model::Local, Model::Gemini] {
        ctx.set_model(model).unwrap();
    }

    let config = Config::load(&paths.config_file());
    assert_eq!(config.default_model, Model::Gemini);
    assert!(config.last_updated.is_some());
}

#[test]
fn test_corrupt_config_starts_with_claude() {
    let dir = TempDir::new().unwrap();
    let paths = Paths::new(dir.path().join(".c9ai"));
    paths.ensure_dirs().unwrap();
    std::fs::write(paths.config_file(), "defaultModel = gemini").unwrap();

    let ctx = SessionContext::init(paths).unwrap();
    assert_eq!(ctx.model(), Model::Claude);
}

#[test]
fn test_first_run_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    let paths = Paths::new(dir.path().join(".c9ai"));
    SessionContext::init(paths.clone()).unwrap();

    let raw = std::fs::read_to_string(paths.config_file()).unwrap();
    assert!(raw.contains("\"defaultModel\": \"claude\""));
    assert!(paths.models_dir().is_dir());
    assert!(paths.logs_dir().is_dir());
}
