use std::path::Path;

use git2::{IndexAddOption, Repository, Signature};

use crate::constants::{
    FALLBACK_SIGNATURE_EMAIL, FALLBACK_SIGNATURE_NAME, INITIAL_COMMIT_MESSAGE,
};
use crate::error::Result;

/// Initializes a repository at the destination, stages every file and
/// creates the initial commit.
///
/// Uses the host's configured git identity when available and a builtin
/// identity otherwise, so the commit succeeds on unconfigured machines.
pub fn init_and_commit<P: AsRef<Path>>(destination: P) -> Result<()> {
    let repo = Repository::init(destination.as_ref())?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let signature = repo
        .signature()
        .or_else(|_| Signature::now(FALLBACK_SIGNATURE_NAME, FALLBACK_SIGNATURE_EMAIL))?;

    repo.commit(Some("HEAD"), &signature, &signature, INITIAL_COMMIT_MESSAGE, &tree, &[])?;
    Ok(())
}
