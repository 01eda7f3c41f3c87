use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use oxmatch_core::{Catalog, CatalogError};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IR dump is empty")]
    Empty,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read and parse the IR dump at `path` (`-` reads stdin).
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let text = read_ir(path)?;
    let catalog = parse_catalog(&text)?;
    debug!(
        path = %path.display(),
        classes = catalog.len(),
        legacy_structs = catalog.legacy_structs().count(),
        "loaded IR dump"
    );
    Ok(catalog)
}

pub fn read_ir(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_catalog(text: &str) -> Result<Catalog, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(Catalog::from_json(text)?)
}
