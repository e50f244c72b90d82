use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{AppConfig, AppState};

const CONFIG_DIR_ENV: &str = "SNAPFEED_CONFIG_DIR";
const STORE_DIR: &str = ".snapfeed";

/// Device-local key-value store: `config.json` (backend host, API key) and
/// `state.json` (the bearer credential).
#[derive(Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Resolve the store directory: `$SNAPFEED_CONFIG_DIR` when set, else
    /// `~/.snapfeed`.
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().context("locate home directory")?;
        Ok(home.join(STORE_DIR))
    }

    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_dir()?)
    }

    /// Open the store, creating the directory and a default config on first
    /// use.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            fs::create_dir_all(root)
                .with_context(|| format!("create store dir {}", root.display()))?;
        }
        let store = Self {
            root: root.to_path_buf(),
        };
        if !store.config_path().exists() {
            store.write_config(&AppConfig::default())?;
        }
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    fn state_path(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn read_config(&self) -> Result<AppConfig> {
        let bytes = fs::read(self.config_path()).context("read config.json")?;
        let cfg: AppConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AppConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")
    }

    pub fn read_state(&self) -> Result<AppState> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(AppState::default());
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: AppState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &AppState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.state_path(), &bytes).context("write state.json")
    }

    pub fn get_token(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.token)
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.token = Some(token.to_string());
        self.write_state(&st)
    }

    pub fn clear_token(&self) -> Result<()> {
        let mut st = self.read_state()?;
        st.token = None;
        self.write_state(&st)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
