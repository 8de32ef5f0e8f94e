use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

pub const DATA_FILE_NAME: &str = "dados_investimentos.sqlite";
pub const DATA_FILE_ENV: &str = "PATRIMONIO_DATA_FILE";
pub const LOG_FILTER_ENV: &str = "PATRIMONIO_LOG";
pub const LOG_FORMAT_ENV: &str = "PATRIMONIO_LOG_FORMAT";
pub const WINDOW_TITLE: &str = "Seu Patrimônio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
}

impl AppConfig {
    /// Resolves paths from the environment, falling back to the platform
    /// data directory.
    pub fn from_env() -> Result<Self> {
        let data_dir = default_data_dir()?;
        let data_file = std::env::var_os(DATA_FILE_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| data_dir.join(DATA_FILE_NAME));
        Ok(Self {
            data_dir,
            data_file,
        })
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("br", "patrimonio", "patrimonio")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
