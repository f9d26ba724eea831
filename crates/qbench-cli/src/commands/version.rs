//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - device and gateset catalog for benchmark compilation",
        style("qbench").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qbench-target    Target model and gate tables");
    println!("  qbench-devices   Calibration-driven device targets");
    println!("  qbench-gatesets  Native gateset scaffolds");
    println!("  qbench-catalog   Catalog facade and configuration");
    println!("  qbench-cli       Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
