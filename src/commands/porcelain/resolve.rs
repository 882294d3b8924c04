use crate::areas::project::Project;
use crate::artifacts::resolve::file_outcome::FileOutcome;
use crate::artifacts::resolve::resolver::ConflictResolver;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub files_resolved: usize,
    pub blocks_resolved: usize,
    pub files_failed: usize,
}

impl Project {
    /// Walks the project tree once and resolves every well-formed conflict
    /// block in place, keeping the local side.
    ///
    /// Files are processed sequentially and independently: each one is fully
    /// read, resolved and (only when at least one block was rewritten)
    /// written back before the next is touched. Per-file failures are logged
    /// and skipped, never fatal to the run.
    pub fn resolve_conflicts(&self) -> anyhow::Result<ResolveSummary> {
        let resolver = ConflictResolver::try_new()?;

        writeln!(
            self.writer(),
            "Scanning for merge conflicts in: {}",
            self.path().display()
        )?;

        let mut summary = ResolveSummary::default();

        for file_path in self.workspace().list_files()? {
            let outcome = self.process_file(&resolver, &file_path);

            if let Some(line) = outcome.report_line(&file_path) {
                writeln!(self.writer(), "{line}")?;
            }

            match outcome {
                FileOutcome::Unchanged => {}
                FileOutcome::Resolved(blocks) => {
                    summary.files_resolved += 1;
                    summary.blocks_resolved += blocks;
                }
                FileOutcome::Failed(_) => summary.files_failed += 1,
            }
        }

        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "Done! Resolved {} conflict(s) across {} file(s), {} file(s) skipped.",
            summary.blocks_resolved,
            summary.files_resolved,
            summary.files_failed
        )?;
        writeln!(
            self.writer(),
            "Review the modified files and commit the changes if everything looks correct."
        )?;

        Ok(summary)
    }

    fn process_file(&self, resolver: &ConflictResolver, file_path: &Path) -> FileOutcome {
        let content = match self.workspace().read_file(file_path) {
            Ok(content) => content,
            Err(error) => return FileOutcome::Failed(error),
        };

        let resolution = resolver.resolve(&content);

        if resolution.blocks_resolved == 0 {
            return FileOutcome::Unchanged;
        }

        match self.workspace().write_file(file_path, &resolution.output) {
            Ok(()) => FileOutcome::Resolved(resolution.blocks_resolved),
            Err(error) => FileOutcome::Failed(error),
        }
    }
}
