use crate::context::StorePaths;
use crate::types::BackendKind;
use anyhow::Result;
use jobtrail_store::{Error, to_relational, to_tabular};

pub fn handle(paths: &StorePaths, target: BackendKind) -> Result<()> {
    let result = match target {
        BackendKind::Relational => to_relational(&paths.tabular, &paths.relational),
        BackendKind::Tabular => to_tabular(&paths.relational, &paths.tabular),
    };

    match result {
        Ok(copied) => {
            println!("Copied {} row(s) into the {} store.", copied, target);
            Ok(())
        }
        // Never overwrite a populated destination; report and leave both
        // stores untouched.
        Err(Error::TargetAlreadyExists(path)) => {
            println!("Migration failed: {} already exists.", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
