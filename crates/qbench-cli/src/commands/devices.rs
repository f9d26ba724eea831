//! Devices command implementation.

use anyhow::Result;
use console::style;

use qbench_catalog::Catalog;
use qbench_devices::builtin_device;

/// Execute the devices command.
pub fn execute(catalog: &Catalog) -> Result<()> {
    println!("{} Available devices:\n", style("qbench").cyan().bold());

    for name in catalog.device_names() {
        let qubits = builtin_device(name).map_or("?".to_string(), |d| d.num_qubits.to_string());
        let gateset = catalog.gateset_for_device(name).unwrap_or("-");
        println!(
            "  {} {:<18} {:>4} qubits  gateset {}",
            style("●").green(),
            style(name).bold(),
            qubits,
            gateset
        );
    }
    println!();
    Ok(())
}
