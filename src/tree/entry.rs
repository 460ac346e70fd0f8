//! Filesystem entries captured during a walk

use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// On-disk identity of a file (device and inode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    pub dev: u64,
    pub ino: u64,
}

/// Metadata captured once, from a stat that does not follow symlinks.
#[derive(Debug, Clone)]
pub struct EntryMetadata {
    pub is_dir: bool,
    pub is_symlink: bool,
    /// Permission bits, including setuid/setgid/sticky
    pub mode: u32,
    /// Size in bytes as reported by the filesystem
    pub len: u64,
    pub modified: Option<SystemTime>,
    pub uid: u32,
    pub(crate) id: Option<FileId>,
}

impl EntryMetadata {
    pub fn from_metadata(meta: &Metadata) -> Self {
        let (mode, uid, id) = platform_fields(meta);
        Self {
            is_dir: meta.is_dir(),
            is_symlink: meta.file_type().is_symlink(),
            mode: mode & 0o7777,
            len: meta.len(),
            modified: meta.modified().ok(),
            uid,
            id,
        }
    }

    /// Regular file with at least one execute bit set.
    pub fn is_executable(&self) -> bool {
        !self.is_dir && !self.is_symlink && self.mode & 0o111 != 0
    }

    /// Permissions rendered the way `ls -l` does, e.g. `drwxr-xr-x`.
    pub fn permissions(&self) -> String {
        let mut out = String::with_capacity(10);
        out.push(if self.is_symlink {
            'l'
        } else if self.is_dir {
            'd'
        } else {
            '-'
        });

        for (shift, special_bit, special) in [(6, 0o4000, 's'), (3, 0o2000, 's'), (0, 0o1000, 't')]
        {
            let bits = (self.mode >> shift) & 0o7;
            out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            out.push(match (bits & 0o1 != 0, self.mode & special_bit != 0) {
                (true, true) => special,
                (false, true) => special.to_ascii_uppercase(),
                (true, false) => 'x',
                (false, false) => '-',
            });
        }
        out
    }

    /// Name of the owning user, or the numeric uid when it has no name.
    pub fn owner(&self) -> String {
        owner_name(self.uid)
    }
}

#[cfg(unix)]
fn platform_fields(meta: &Metadata) -> (u32, u32, Option<FileId>) {
    use std::os::unix::fs::MetadataExt;

    let id = FileId {
        dev: meta.dev(),
        ino: meta.ino(),
    };
    (meta.mode(), meta.uid(), Some(id))
}

#[cfg(not(unix))]
fn platform_fields(meta: &Metadata) -> (u32, u32, Option<FileId>) {
    let mode = if meta.permissions().readonly() {
        0o444
    } else {
        0o644
    };
    let mode = if meta.is_dir() { mode | 0o111 } else { mode };
    (mode, 0, None)
}

#[cfg(unix)]
fn owner_name(uid: u32) -> String {
    uzers::get_user_by_uid(uid)
        .map(|user| user.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| uid.to_string())
}

#[cfg(not(unix))]
fn owner_name(uid: u32) -> String {
    uid.to_string()
}

/// A discovered filesystem entry, before it becomes a tree node.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub metadata: EntryMetadata,
    /// Identity of the directory a followed symlink resolves to
    target_dir: Option<FileId>,
    target_is_dir: bool,
}

impl Entry {
    /// Stat a path without following a final symlink.
    pub fn lstat(path: &Path) -> io::Result<Self> {
        let meta = fs::symlink_metadata(path)?;
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, path.to_path_buf(), &meta))
    }

    /// Capture a directory listing entry. Symlinks are not followed.
    pub fn from_dir_entry(entry: &DirEntry) -> io::Result<Self> {
        let meta = entry.metadata()?;
        let name = entry.file_name().to_string_lossy().to_string();
        Ok(Self::new(name, entry.path(), &meta))
    }

    fn new(name: String, path: PathBuf, meta: &Metadata) -> Self {
        Self {
            name,
            path,
            metadata: EntryMetadata::from_metadata(meta),
            target_dir: None,
            target_is_dir: false,
        }
    }

    /// Resolve a symlink's target so the walker can recurse through it.
    /// Broken links and links to non-directories stay leaves.
    pub fn follow(mut self) -> Self {
        if !self.metadata.is_symlink {
            return self;
        }
        if let Ok(target) = fs::metadata(&self.path) {
            if target.is_dir() {
                self.target_is_dir = true;
                self.target_dir = platform_fields(&target).2;
            }
        }
        self
    }

    /// Directory, or symlink that was followed into a directory.
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir || self.target_is_dir
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub(crate) fn dir_id(&self) -> Option<FileId> {
        if self.target_is_dir {
            self.target_dir
        } else {
            self.metadata.id
        }
    }
}
