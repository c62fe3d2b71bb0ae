//! Applies a computed name to a file on disk.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CollisionPolicy;
use crate::error::{FilekitError, Result};
use crate::rename::ComposedName;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStatus {
    /// Moved to the new name.
    Renamed,
    /// New name equals the old one.
    Unchanged,
    /// Dry run: would have been moved.
    Planned,
}

/// Old and new location of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Original path.
    pub from: PathBuf,
    /// Destination path.
    pub to: PathBuf,
    /// Whether the move happened.
    pub status: RenameStatus,
}

/// Renames files within their own directory.
///
/// A renamer remembers the destinations it has handed out and the sources it
/// has moved away, so a dry run sees the same collisions as a real run of the
/// same batch.
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    collision: CollisionPolicy,
    dry_run: bool,
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl Renamer {
    /// Create a renamer.
    pub fn new(collision: CollisionPolicy, dry_run: bool) -> Self {
        Self {
            collision,
            dry_run,
            ..Default::default()
        }
    }

    /// Rename `from` to `name` in the same directory.
    ///
    /// # Errors
    ///
    /// - [`FilekitError::DestinationExists`] under [`CollisionPolicy::Skip`]
    /// - [`FilekitError::Io`] if the rename itself fails
    pub fn rename(&mut self, from: &Path, name: &ComposedName) -> Result<RenameOutcome> {
        let dir = from.parent().unwrap_or_else(|| Path::new(""));
        let mut to = dir.join(name.file_name());

        if to == from {
            return Ok(RenameOutcome {
                from: from.to_path_buf(),
                to,
                status: RenameStatus::Unchanged,
            });
        }

        if self.occupied(&to) {
            match self.collision {
                CollisionPolicy::Skip => return Err(FilekitError::destination_exists(to)),
                CollisionPolicy::Overwrite => {
                    tracing::debug!(path = %to.display(), "replacing existing destination");
                }
                CollisionPolicy::Suffix => to = self.first_free(dir, name),
            }
        }

        let status = if self.dry_run {
            RenameStatus::Planned
        } else {
            fs::rename(from, &to)?;
            RenameStatus::Renamed
        };

        self.claimed.remove(from);
        self.vacated.insert(from.to_path_buf());
        self.vacated.remove(&to);
        self.claimed.insert(to.clone());

        Ok(RenameOutcome {
            from: from.to_path_buf(),
            to,
            status,
        })
    }

    /// Broken symlinks count as taken.
    fn occupied(&self, path: &Path) -> bool {
        self.claimed.contains(path)
            || (fs::symlink_metadata(path).is_ok() && !self.vacated.contains(path))
    }

    fn first_free(&self, dir: &Path, name: &ComposedName) -> PathBuf {
        (1..)
            .map(|n| dir.join(name.with_counter(n).file_name()))
            .find(|candidate| !self.occupied(candidate))
            .unwrap_or_else(|| dir.join(name.file_name()))
    }
}
