use crate::context::StorePaths;
use anyhow::Result;
use jobtrail_store::clean_tabular;

pub fn handle(paths: &StorePaths) -> Result<()> {
    let remaining = clean_tabular(&paths.tabular)?;
    println!(
        "Aggregated {} down to {} row(s).",
        paths.tabular.display(),
        remaining
    );
    Ok(())
}
