//! Gateset command implementation.

use anyhow::Result;

use qbench_catalog::Catalog;

use super::common::{print_target, target_json};

/// Execute the gateset command.
pub fn execute(catalog: &Catalog, name: &str, num_qubits: Option<u32>, json: bool) -> Result<()> {
    let target = match num_qubits {
        Some(n) => catalog.gateset(name, n)?,
        None => catalog.default_gateset(name)?,
    };
    if json {
        println!("{}", target_json(&target)?);
    } else {
        print_target(&target);
    }
    Ok(())
}
