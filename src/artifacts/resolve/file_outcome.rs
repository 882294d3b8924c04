use colored::Colorize;
use std::path::Path;
use std::string::FromUtf8Error;

/// Why a file was skipped. Decode failures cover binary or wrongly-encoded
/// content; I/O failures cover permissions, files removed mid-walk and
/// write errors.
#[derive(Debug)]
pub enum FileError {
    Decode(FromUtf8Error),
    Io(std::io::Error),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Decode(error) => write!(
                f,
                "content is not valid UTF-8 (invalid byte at offset {})",
                error.utf8_error().valid_up_to()
            ),
            FileError::Io(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Decode(error) => Some(error),
            FileError::Io(error) => Some(error),
        }
    }
}

/// The per-file result of one resolution attempt.
#[derive(Debug)]
pub enum FileOutcome {
    /// No well-formed conflict block was found; the file was not written.
    Unchanged,
    /// The given number of blocks were rewritten and the file overwritten.
    Resolved(usize),
    /// The file was skipped; the walk continues.
    Failed(FileError),
}

impl FileOutcome {
    /// The console line for this outcome, if it deserves one. Unchanged files
    /// stay silent so a quiet tree produces a quiet run.
    pub fn report_line(&self, path: &Path) -> Option<String> {
        match self {
            FileOutcome::Unchanged => None,
            FileOutcome::Resolved(blocks) => Some(format!(
                "{} {} ({} conflict{} resolved, kept local version)",
                "resolved:".green(),
                path.display(),
                blocks,
                if *blocks == 1 { "" } else { "s" },
            )),
            FileOutcome::Failed(error) => Some(format!(
                "{} {}: {}",
                "error:".red(),
                path.display(),
                error,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn unchanged_files_produce_no_report_line() {
        let path = PathBuf::from("src/lib.rs");

        assert!(FileOutcome::Unchanged.report_line(&path).is_none());
    }

    #[test]
    fn resolved_line_names_the_path_count_and_policy() {
        let path = PathBuf::from("src/lib.rs");

        let line = FileOutcome::Resolved(2).report_line(&path).unwrap();

        assert!(line.contains("src/lib.rs"));
        assert!(line.contains("2 conflicts resolved"));
        assert!(line.contains("kept local version"));
    }

    #[test]
    fn single_conflict_is_reported_in_the_singular() {
        let path = PathBuf::from("notes.md");

        let line = FileOutcome::Resolved(1).report_line(&path).unwrap();

        assert!(line.contains("1 conflict resolved"));
    }

    #[test]
    fn failed_line_carries_the_error_message() {
        let path = PathBuf::from("image.png");
        let error = FileError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));

        let line = FileOutcome::Failed(error).report_line(&path).unwrap();

        assert!(line.contains("image.png"));
        assert!(line.contains("permission denied"));
    }
}
