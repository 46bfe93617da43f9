use crate::context::StorePaths;
use anyhow::Result;
use jobtrail_store::{Error, TabularStore};

pub fn handle(paths: &StorePaths) -> Result<()> {
    match TabularStore::create(&paths.tabular) {
        Ok(_) => {
            println!("Initialized empty store at {}", paths.tabular.display());
            Ok(())
        }
        // Re-running init is harmless; report and leave the store alone.
        Err(Error::AlreadyInitialized(path)) => {
            println!("Initialization failed: {} already exists.", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
