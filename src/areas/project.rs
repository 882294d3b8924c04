use crate::areas::ignore::IgnoreSet;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Project {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Project {
    pub fn new(
        path: &str,
        ignore: IgnoreSet,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("the specified path does not exist: {path}"))?;

        if !path.is_dir() {
            anyhow::bail!("the specified path is not a directory: {:?}", path);
        }

        let workspace = Workspace::new(path.clone().into_boxed_path(), ignore);

        Ok(Project {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
