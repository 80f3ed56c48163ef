//! Local model files under `~/.c9ai/models`.

use crate::error::{C9aiError, Result};
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// A model that can be downloaded with `models install <key>`.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub size: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub filename: &'static str,
}

pub static CATALOG: [CatalogEntry; 3] = [
    CatalogEntry {
        key: "phi-3",
        name: "Phi-3-mini",
        size: "2.2GB",
        description: "Microsoft Phi-3 Mini - Fast, efficient, good reasoning",
        url: "https://huggingface.co/microsoft/Phi-3-mini-4k-instruct-gguf/resolve/main/Phi-3-mini-4k-instruct-q4.gguf",
        filename: "phi-3-mini-4k-instruct-q4.gguf",
    },
    CatalogEntry {
        key: "tinyllama",
        name: "TinyLlama-1.1B",
        size: "680MB",
        description: "TinyLlama 1.1B - Ultra lightweight for testing",
        url: "https://huggingface.co/TheBloke/TinyLlama-1.1B-Chat-v1.0-GGUF/resolve/main/tinyllama-1.1b-chat-v1.0.Q4_K_M.gguf",
        filename: "tinyllama-1.1b-chat-v1.0.Q4_K_M.gguf",
    },
    CatalogEntry {
        key: "llama",
        name: "Llama-2-7B-Chat",
        size: "3.9GB",
        description: "Meta Llama 2 7B - Powerful conversational model",
        url: "https://huggingface.co/TheBloke/Llama-2-7B-Chat-GGML/resolve/main/llama-2-7b-chat.q4_0.bin",
        filename: "llama-2-7b-chat.q4_0.bin",
    },
];

pub fn catalog_entry(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.key == key)
}

/// A model file present on disk.
#[derive(Debug, Clone)]
pub struct InstalledModel {
    pub file_name: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Local>>,
}

impl InstalledModel {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(PathBuf),
    AlreadyInstalled,
}

fn is_model_file(name: &str) -> bool {
    name.ends_with(".gguf") || name.ends_with(".bin")
}

#[derive(Debug, Clone)]
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every file name in the models directory, sorted.
    fn file_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Installed `.gguf`/`.bin` model files, sorted by name.
    pub fn installed(&self) -> Result<Vec<InstalledModel>> {
        let mut models = Vec::new();
        for name in self.file_names()? {
            if !is_model_file(&name) {
                continue;
            }
            let meta = std::fs::metadata(self.dir.join(&name))?;
            models.push(InstalledModel {
                file_name: name,
                size_bytes: meta.len(),
                modified: meta.modified().ok().map(DateTime::<Local>::from),
            });
        }
        Ok(models)
    }

    /// Whether any local model file is present. Unreadable dir counts as none.
    pub fn has_local_model(&self) -> bool {
        self.installed().map(|m| !m.is_empty()).unwrap_or(false)
    }

    /// First installed model, the one the `local` backend loads.
    pub fn first_model(&self) -> Option<InstalledModel> {
        self.installed().ok()?.into_iter().next()
    }

    pub fn is_installed(&self, key: &str) -> bool {
        self.file_names()
            .map(|names| names.iter().any(|n| n.contains(key)))
            .unwrap_or(false)
    }

    /// Files belonging to `key` (name contains the key).
    pub fn files_for(&self, key: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .file_names()?
            .into_iter()
            .filter(|n| n.contains(key))
            .map(|n| self.dir.join(n))
            .collect())
    }

    /// Download a catalog model. A partial file is removed on failure.
    pub fn install(&self, key: &str) -> Result<InstallOutcome> {
        let entry = catalog_entry(key).ok_or_else(|| C9aiError::UnknownCatalogModel(key.to_string()))?;
        let dest = self.dir.join(entry.filename);
        if dest.exists() {
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        match download(entry.url, &dest) {
            Ok(()) => Ok(InstallOutcome::Installed(dest)),
            Err(e) => {
                if dest.exists() {
                    let _ = std::fs::remove_file(&dest);
                }
                Err(e)
            }
        }
    }

    /// Delete every file for `key`. Returns the removed file names.
    pub fn remove(&self, key: &str) -> Result<Vec<String>> {
        let mut removed = Vec::new();
        for path in self.files_for(key)? {
            std::fs::remove_file(&path)?;
            if let Some(name) = path.file_name() {
                removed.push(name.to_string_lossy().into_owned());
            }
        }
        Ok(removed)
    }
}

fn download(url: &str, dest: &Path) -> Result<()> {
    tracing::debug!(url, dest = %dest.display(), "downloading model");

    let response = ureq::get(url).call()?;
    let total: Option<u64> = response
        .header("Content-Length")
        .and_then(|v| v.parse().ok());

    let bar = match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::with_template(
                    "{spinner} Downloading [{bar:30}] {bytes}/{total_bytes} ({eta})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        }
        None => ProgressBar::new_spinner(),
    };

    save_stream(&bar, response.into_reader(), dest)
}

/// Stream `reader` into `dest` while ticking `bar`. The bar is cleared
/// whether or not the copy succeeds.
fn save_stream(bar: &ProgressBar, reader: impl Read, dest: &Path) -> Result<()> {
    let mut reader = bar.wrap_read(reader);
    let result = File::create(dest)
        .map_err(C9aiError::from)
        .and_then(|mut file| copy_all(&mut reader, &mut file));
    bar.finish_and_clear();
    result.map(|_| ())
}

/// Copy everything and flush the writer.
fn copy_all(reader: &mut impl Read, writer: &mut impl Write) -> Result<u64> {
    let copied = io::copy(reader, writer).map_err(|e| C9aiError::Download(e.to_string()))?;
    writer.flush()?;
    Ok(copied)
}
