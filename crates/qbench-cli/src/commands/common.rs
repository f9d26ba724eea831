//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use console::style;

use qbench_catalog::{Catalog, CatalogConfig};
use qbench_target::{Instruction, TargetModel};

/// Build the catalog the commands query.
pub fn build_catalog(config: CatalogConfig) -> Catalog {
    Catalog::new(config)
}

/// Mean of the recorded error and duration figures of an instruction.
pub fn mean_figures(instruction: &Instruction) -> (Option<f64>, Option<f64>) {
    let (mut errors, mut durations) = (Vec::new(), Vec::new());
    for qargs in instruction.qargs() {
        if let Some(props) = instruction.properties(qargs) {
            errors.extend(props.error);
            durations.extend(props.duration);
        }
    }
    let mean = |v: &[f64]| (!v.is_empty()).then(|| v.iter().sum::<f64>() / v.len() as f64);
    (mean(&errors), mean(&durations))
}

/// Pretty-printed JSON of a whole target.
pub fn target_json(target: &TargetModel) -> Result<String> {
    serde_json::to_string_pretty(target).context("Failed to serialize target")
}

/// Human-readable summary of a target.
pub fn print_target(target: &TargetModel) {
    println!(
        "{} {} ({} qubits)",
        style("Target").cyan().bold(),
        style(target.name()).bold(),
        target.num_qubits()
    );
    let pairs = target.coupling_pairs();
    if !pairs.is_empty() {
        println!("  Coupled pairs: {}", pairs.len());
    }
    println!();

    for (name, instruction) in target.instructions() {
        let arity = match instruction.operation().num_qubits() {
            Some(n) => format!("{n}q"),
            None => "variadic".to_string(),
        };
        if instruction.is_global() {
            println!("  {:<12} {:<9} {}", style(name).bold(), arity, style("global").dim());
            continue;
        }
        let (error, duration) = mean_figures(instruction);
        println!(
            "  {:<12} {:<9} {:>5} entries  error {}  duration {}",
            style(name).bold(),
            arity,
            instruction.num_entries(),
            error.map_or("-".to_string(), |e| format!("{e:.3e}")),
            duration.map_or("-".to_string(), |d| format!("{d:.3e} s")),
        );
    }
}
