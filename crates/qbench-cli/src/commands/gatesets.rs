//! Gatesets command implementation.

use anyhow::Result;
use console::style;

use qbench_catalog::Catalog;
use qbench_gatesets::{Scaffold, gateset_spec};

/// Execute the gatesets command.
pub fn execute(catalog: &Catalog) -> Result<()> {
    println!("{} Available gatesets:\n", style("qbench").cyan().bold());

    for name in catalog.gateset_names() {
        let Some(spec) = gateset_spec(name) else {
            println!("  {} {}", style("○").dim(), style(name).bold());
            continue;
        };
        let kind = match spec.scaffold {
            Scaffold::Dense => "dense",
            Scaffold::Generic => "generic",
        };
        println!("  {} {} ({kind})", style("●").green(), style(name).bold());
        println!("    Gates: {}", spec.gates.join(", "));
    }
    println!();
    Ok(())
}
