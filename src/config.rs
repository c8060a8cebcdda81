use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// Terminal client for the LearnGame study-material service.
#[derive(Debug, Clone, Parser)]
#[command(name = "learngame", version, about)]
pub struct Config {
    /// Base URL of the service that exposes `POST /upload`
    #[arg(long, env = "LEARNGAME_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Directory the markdown export is saved into
    #[arg(long, env = "LEARNGAME_SAVE_DIR", default_value = ".")]
    pub save_dir: PathBuf,

    /// PDF to upload right after start
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.server.trim_end_matches('/'))
    }
}
