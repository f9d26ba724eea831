//! Device command implementation.

use anyhow::Result;

use qbench_catalog::Catalog;

use super::common::{print_target, target_json};

/// Execute the device command.
pub fn execute(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let target = catalog.device(name)?;
    if json {
        println!("{}", target_json(&target)?);
        return Ok(());
    }

    print_target(&target);
    if let Ok(gateset) = catalog.gateset_for_device(name) {
        println!();
        println!("  Native gateset: {gateset}");
    }
    Ok(())
}
