// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::appdirs;
use crate::error::Result;
use crate::target;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub language: String,
    #[serde(default)]
    pub platform: Option<String>,
}

impl Settings {
    /// Loads embedded defaults overlaid by each of the given sources in order.
    pub fn load(sources: impl IntoIterator<Item = Source>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        for source in sources {
            builder = match source {
                Source::File(file) => {
                    // format follows the extension, files without one are read as yaml
                    let source = match file.path.extension() {
                        Some(_) => File::from(file.path.as_path()),
                        None => File::from(file.path.as_path()).format(FileFormat::Yaml),
                    };
                    builder.add_source(source.required(file.required))
                }
                Source::String(text, format) => builder.add_source(File::from_str(&text, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Loads embedded defaults overlaid by the optional user configuration file.
    pub fn load_default() -> Result<Self> {
        let sources = Self::default_sources();
        log::debug!("loading settings from {:?}", sources);
        Self::load(sources)
    }

    /// Returns the optional user configuration file source used by [`Settings::load_default`].
    pub fn default_sources() -> Option<Source> {
        appdirs::config_file().map(|path| Source::from(SourceFile::new(path).required(false)))
    }

    /// Returns the platform to show pages for.
    pub fn platform(&self) -> Result<&str> {
        target::resolve(self.platform.as_deref())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}

// ---

/// A configuration source.
#[derive(Debug, Clone)]
pub enum Source {
    File(SourceFile),
    String(String, FileFormat),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

// ---

/// A configuration file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}
