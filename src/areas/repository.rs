use crate::areas::commit_graph::CommitGraph;
use crate::areas::database::Database;
use crate::areas::index::{Index, IndexLock};
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::config::RepositoryConfig;
use crate::errors::{RepositoryError, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle on one repository root
///
/// Every command is a method on this type. Output goes to the writer handed
/// in at construction, so tests and the pager can capture it.
pub struct Repository {
    config: RepositoryConfig,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `config.root()`
    ///
    /// Nothing is created; the root is resolved to an absolute path when it
    /// already exists.
    pub fn new(config: RepositoryConfig, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let root = config.root();
        let root = if root.exists() {
            root.canonicalize().map_err(RepositoryError::io(root))?
        } else {
            root.to_path_buf()
        };
        let config = RepositoryConfig::new(root).with_store_dir(config.store_dir());

        let index = Index::new(config.index_path());
        let database = Database::new(config.objects_path());
        let workspace = Workspace::new(config.root().to_path_buf(), config.store_dir());
        let refs = Refs::new(config.store_path().into_boxed_path());

        Ok(Repository {
            config,
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        self.config.root()
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn commit_graph(&self) -> CommitGraph<'_> {
        CommitGraph::new(&self.database, &self.refs)
    }

    pub fn is_initialized(&self) -> bool {
        self.database.objects_path().is_dir() && self.refs.head_path().is_file()
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized(self.path().to_path_buf()))
        }
    }

    /// Take the index lock and settle any interrupted commit
    ///
    /// The index is reloaded from disk once the lock is held.
    pub fn lock_index(&self, index: &mut Index) -> Result<IndexLock> {
        let lock = index.lock()?;
        index.rehydrate()?;
        self.commit_graph().recover(index)?;

        Ok(lock)
    }
}
