use crate::areas::ignore::IgnoreSet;
use crate::artifacts::resolve::file_outcome::FileError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File discovery and whole-file read/write under a root directory.
///
/// All paths handed out and accepted are relative to the root. Reads decode
/// the content as UTF-8 and report a [`FileError::Decode`] when that fails, so
/// binary files are skipped instead of corrupted.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    ignore: IgnoreSet,
}

impl Workspace {
    pub fn new(path: Box<Path>, ignore: IgnoreSet) -> Self {
        Workspace { path, ignore }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Check if the root path still exists
        if !self.path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", self.path);
        }

        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        Ok(WalkDir::new(self.path.as_ref())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_candidate_file_path(entry.path()))
            .collect::<Vec<_>>())
    }

    fn check_if_candidate_file_path(&self, path: &Path) -> Option<PathBuf> {
        if !path.is_file() {
            return None;
        }

        let relative_path = path.strip_prefix(self.path.as_ref()).ok()?.to_path_buf();

        if self.ignore.is_ignored(&relative_path) {
            None
        } else {
            Some(relative_path)
        }
    }

    pub fn read_file(&self, file_path: &Path) -> Result<String, FileError> {
        let bytes = std::fs::read(self.path.join(file_path)).map_err(FileError::Io)?;

        String::from_utf8(bytes).map_err(FileError::Decode)
    }

    pub fn write_file(&self, file_path: &Path, content: &str) -> Result<(), FileError> {
        std::fs::write(self.path.join(file_path), content).map_err(FileError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::{FileWriteBin, FileWriteStr, PathChild};

    fn workspace_at(dir: &assert_fs::TempDir) -> Workspace {
        Workspace::new(
            dir.path().to_path_buf().into_boxed_path(),
            IgnoreSet::default(),
        )
    }

    #[test]
    fn lists_regular_files_relative_to_the_root() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("sub/b.txt").write_str("b").unwrap();

        let mut files = workspace_at(&dir).list_files().unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")]
        );
    }

    #[test]
    fn never_lists_files_inside_ignored_directories() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("kept.txt").write_str("x").unwrap();
        dir.child("node_modules/pkg/index.js").write_str("x").unwrap();
        dir.child("sub/.git/config").write_str("x").unwrap();

        let files = workspace_at(&dir).list_files().unwrap();

        assert_eq!(files, vec![PathBuf::from("kept.txt")]);
    }

    #[test]
    fn ignored_name_in_the_root_path_itself_does_not_exclude_everything() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("build/inner.txt").write_str("x").unwrap();

        let build_root = Workspace::new(
            dir.path().join("build").into_boxed_path(),
            IgnoreSet::default(),
        );

        // Only components below the root count towards exclusion
        assert_eq!(
            build_root.list_files().unwrap(),
            vec![PathBuf::from("inner.txt")]
        );
    }

    #[test]
    fn read_write_round_trips_utf8_content() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("file.txt").write_str("before").unwrap();
        let workspace = workspace_at(&dir);

        workspace
            .write_file(Path::new("file.txt"), "after\n")
            .unwrap();

        assert_eq!(
            workspace.read_file(Path::new("file.txt")).unwrap(),
            "after\n"
        );
    }

    #[test]
    fn reading_non_utf8_content_is_a_decode_error() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("blob.bin")
            .write_binary(&[0x00, 0xff, 0xfe, 0x3c])
            .unwrap();

        let result = workspace_at(&dir).read_file(Path::new("blob.bin"));

        assert!(matches!(result, Err(FileError::Decode(_))));
    }

    #[test]
    fn reading_a_missing_file_is_an_io_error() {
        let dir = assert_fs::TempDir::new().unwrap();

        let result = workspace_at(&dir).read_file(Path::new("absent.txt"));

        assert!(matches!(result, Err(FileError::Io(_))));
    }
}
