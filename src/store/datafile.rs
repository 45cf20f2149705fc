// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Rulecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Rulecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use super::codec::{CodecError, DatafileCodec, JsonCodec};
use crate::model::CatalogueBase;

/// One document on disk together with its decoded root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datafile {
    path: PathBuf,
    root: Arc<CatalogueBase>,
}

impl Datafile {
    pub fn new(path: impl Into<PathBuf>, root: impl Into<Arc<CatalogueBase>>) -> Self {
        Self {
            path: path.into(),
            root: root.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Arc<CatalogueBase> {
        &self.root
    }

    pub fn name(&self) -> &str {
        self.root.name()
    }

    /// The same file with a replacement root.
    pub fn with_root(&self, root: impl Into<Arc<CatalogueBase>>) -> Self {
        Self {
            path: self.path.clone(),
            root: root.into(),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Decode {
        path: PathBuf,
        source: CodecError,
    },
    Encode {
        path: PathBuf,
        source: CodecError,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Decode { path, source } => write!(f, "cannot read datafile {path:?}: {source}"),
            Self::Encode { path, source } => {
                write!(f, "cannot write datafile {path:?}: {source}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// - Writes a temp file, fsyncs it, then renames atomically into place.
    /// - On unix, also fsyncs the parent directory after the rename.
    Durable,
}

/// Loads and saves datafiles through a codec.
#[derive(Debug, Clone)]
pub struct DatafileStore<C = JsonCodec> {
    codec: C,
    durability: WriteDurability,
}

impl Default for DatafileStore<JsonCodec> {
    fn default() -> Self {
        Self::new(JsonCodec::default())
    }
}

impl<C: DatafileCodec> DatafileStore<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Datafile, StoreError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = self
            .codec
            .decode(&bytes)
            .map_err(|source| StoreError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), document = root.name(), "datafile loaded");
        Ok(Datafile::new(path, root))
    }

    /// Loads every path, stopping at the first failure.
    pub fn load_all<P: AsRef<Path>>(
        &self,
        paths: impl IntoIterator<Item = P>,
    ) -> Result<Vec<Datafile>, StoreError> {
        paths.into_iter().map(|path| self.load(path)).collect()
    }

    /// Overwrites the datafile's path with its current root.
    pub fn save(&self, datafile: &Datafile) -> Result<(), StoreError> {
        let bytes = self
            .codec
            .encode(datafile.root())
            .map_err(|source| StoreError::Encode {
                path: datafile.path().to_path_buf(),
                source,
            })?;
        write_atomic(datafile.path(), &bytes, self.durability)?;
        debug!(
            path = %datafile.path().display(),
            document = datafile.name(),
            bytes = bytes.len(),
            "datafile saved"
        );
        Ok(())
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let io_err = |path: &Path, source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => return Err(io_err(path, io::Error::other("path has no parent"))),
    };
    let Some(file_name) = path.file_name() else {
        return Err(io_err(path, io::Error::other("path has no file name")));
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".rulecast.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| io_err(&tmp_path, source))?;

    let written = file.write_all(contents).and_then(|()| {
        if durability == WriteDurability::Durable {
            file.sync_all()
        } else {
            Ok(())
        }
    });
    drop(file);
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(&tmp_path, source));
    }

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        warn!(path = %path.display(), error = %source, "atomic rename failed");
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(path, source));
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| io_err(parent, source))?;
            dir.sync_all().map_err(|source| io_err(parent, source))?;
        }
    }

    Ok(())
}
