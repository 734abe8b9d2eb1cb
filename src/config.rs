//! Run configuration.

use std::path::PathBuf;

use sttgen_codegen::Backend;

/// Everything a run needs besides the build metadata.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory searched for `.csv` tables.
    pub input_dir: PathBuf,
    /// Directory the `<table>_<tag>` output directories are created in.
    pub output_dir: PathBuf,
    pub backends: Vec<Backend>,
    /// Validate and render without touching the filesystem.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            backends: Backend::ALL.to_vec(),
            dry_run: false,
        }
    }
}

/// Backend choice as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BackendSelection {
    C,
    Cpp,
    #[default]
    All,
}

impl BackendSelection {
    pub fn backends(self) -> Vec<Backend> {
        match self {
            Self::C => vec![Backend::C],
            Self::Cpp => vec![Backend::CPP],
            Self::All => Backend::ALL.to_vec(),
        }
    }
}
