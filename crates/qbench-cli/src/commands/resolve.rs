//! Resolve command implementation.

use anyhow::Result;
use console::style;

use qbench_catalog::{BenchmarkLevel, Catalog, OptimizationLevel, ResolvedTarget, TargetRequest};

/// Execute the resolve command.
pub fn execute(
    catalog: &Catalog,
    level: &str,
    target: Option<&str>,
    num_qubits: u32,
    opt_level: i64,
) -> Result<()> {
    let level: BenchmarkLevel = level.parse()?;
    let opt_level = OptimizationLevel::new(opt_level)?;

    let mut request = TargetRequest::new(level, num_qubits).with_opt_level(opt_level);
    if let Some(target) = target {
        request = request.with_target(target);
    }

    println!(
        "{} level {} on {} qubits, opt_level {}",
        style("Resolving").cyan().bold(),
        style(level).bold(),
        num_qubits,
        opt_level
    );

    match catalog.resolve(&request)? {
        ResolvedTarget::Independent => {
            println!("  Target-independent: no device or gateset required");
        }
        ResolvedTarget::Gateset { name, target } => {
            println!(
                "  Gateset {} scaffolded to {} qubits ({} operations)",
                style(name).bold(),
                target.num_qubits(),
                target.num_instructions()
            );
            println!(
                "  Operations: {}",
                target.operation_names().collect::<Vec<_>>().join(", ")
            );
        }
        ResolvedTarget::Device { name, target } => {
            println!(
                "  Device {} with {} qubits, {} coupled pairs",
                style(name).bold(),
                target.num_qubits(),
                target.coupling_pairs().len()
            );
            println!(
                "  Operations: {}",
                target.operation_names().collect::<Vec<_>>().join(", ")
            );
        }
    }
    Ok(())
}
