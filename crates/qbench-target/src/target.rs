//! The target model.
//!
//! A [`TargetModel`] describes what a device (or an idealized gateset) can
//! execute: its qubit count and, per operation, either the qubit tuples the
//! operation is calibrated on or a global marker meaning "any tuple".
//!
//! Every mutation goes through checks that keep the model valid:
//! qubit indices in range, tuple width equal to the operation arity,
//! error rates in `[0, 1)`, durations finite and non-negative.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{TargetError, TargetResult};
use crate::operation::Operation;
use crate::properties::InstructionProperties;
use crate::qargs::Qargs;

/// Calibration entries of one instruction, keyed by qubit tuple.
pub type QargsMap = BTreeMap<Qargs, Option<InstructionProperties>>;

/// Where an instruction may be applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionSupport {
    /// Any qubit tuple of the operation's arity; no calibration attached.
    Global,
    /// Only the listed tuples, each with optional calibration.
    Qargs(#[serde(with = "qargs_map")] QargsMap),
}

/// An operation together with its support on the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    operation: Operation,
    support: InstructionSupport,
}

impl Instruction {
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn support(&self) -> &InstructionSupport {
        &self.support
    }

    /// Whether the instruction is valid on any tuple.
    pub fn is_global(&self) -> bool {
        matches!(self.support, InstructionSupport::Global)
    }

    /// Calibrated tuples in order; empty for global instructions.
    pub fn qargs(&self) -> impl Iterator<Item = Qargs> + '_ {
        let map = match &self.support {
            InstructionSupport::Qargs(map) => Some(map),
            InstructionSupport::Global => None,
        };
        map.into_iter().flat_map(|m| m.keys().copied())
    }

    /// Properties recorded for `qargs`, if any.
    pub fn properties(&self, qargs: Qargs) -> Option<&InstructionProperties> {
        match &self.support {
            InstructionSupport::Qargs(map) => map.get(&qargs)?.as_ref(),
            InstructionSupport::Global => None,
        }
    }

    /// Number of calibrated tuples (zero for global instructions).
    pub fn num_entries(&self) -> usize {
        match &self.support {
            InstructionSupport::Qargs(map) => map.len(),
            InstructionSupport::Global => 0,
        }
    }

    fn supports(&self, qargs: Qargs) -> bool {
        match &self.support {
            InstructionSupport::Qargs(map) => map.contains_key(&qargs),
            InstructionSupport::Global => self
                .operation
                .num_qubits()
                .is_none_or(|n| n == qargs.arity()),
        }
    }
}

/// Machine-readable description of a device or gateset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetModel {
    name: String,
    num_qubits: u32,
    instructions: BTreeMap<String, Instruction>,
}

impl TargetModel {
    /// Create an empty target.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Add an instruction restricted to the given tuples.
    ///
    /// Fails if the name is taken, if no tuple is given, or if any entry
    /// breaks a range invariant. Nothing is added on failure.
    pub fn add_instruction<I>(&mut self, operation: Operation, entries: I) -> TargetResult<()>
    where
        I: IntoIterator<Item = (Qargs, Option<InstructionProperties>)>,
    {
        self.ensure_new(operation.name())?;
        let map: QargsMap = entries.into_iter().collect();
        if map.is_empty() {
            return Err(TargetError::EmptyInstruction(operation.name().to_string()));
        }
        for (qargs, props) in &map {
            self.check_entry(&operation, *qargs, props.as_ref())?;
        }
        self.instructions.insert(
            operation.name().to_string(),
            Instruction {
                operation,
                support: InstructionSupport::Qargs(map),
            },
        );
        Ok(())
    }

    /// Add an instruction valid on any tuple of its arity.
    pub fn add_global_instruction(&mut self, operation: Operation) -> TargetResult<()> {
        self.ensure_new(operation.name())?;
        self.check_global(&operation)?;
        self.instructions.insert(
            operation.name().to_string(),
            Instruction {
                operation,
                support: InstructionSupport::Global,
            },
        );
        Ok(())
    }

    /// Replace the properties of an existing entry.
    pub fn update_properties(
        &mut self,
        name: &str,
        qargs: Qargs,
        properties: Option<InstructionProperties>,
    ) -> TargetResult<()> {
        let instruction = self
            .instructions
            .get_mut(name)
            .ok_or_else(|| TargetError::UnknownInstruction(name.to_string()))?;
        let unknown = || TargetError::UnknownQargs {
            operation: name.to_string(),
            qargs: qargs.to_string(),
        };
        let InstructionSupport::Qargs(map) = &mut instruction.support else {
            return Err(unknown());
        };
        let entry = map.get_mut(&qargs).ok_or_else(unknown)?;
        if let Some(props) = &properties {
            props.check(name, qargs)?;
        }
        *entry = properties;
        Ok(())
    }

    /// Remove an instruction, returning it.
    pub fn remove_instruction(&mut self, name: &str) -> Option<Instruction> {
        self.instructions.remove(name)
    }

    /// Operation names in sorted order.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.instructions.keys().map(String::as_str)
    }

    /// All instructions keyed by name.
    pub fn instructions(&self) -> impl Iterator<Item = (&str, &Instruction)> {
        self.instructions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn instruction(&self, name: &str) -> Option<&Instruction> {
        self.instructions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instructions.contains_key(name)
    }

    pub fn num_instructions(&self) -> usize {
        self.instructions.len()
    }

    /// Properties of `name` on `qargs`, if calibrated.
    pub fn properties(&self, name: &str, qargs: Qargs) -> Option<&InstructionProperties> {
        self.instructions.get(name)?.properties(qargs)
    }

    /// Whether `name` can run on `qargs`.
    pub fn supports(&self, name: &str, qargs: Qargs) -> bool {
        if qargs.qubits().any(|q| q >= self.num_qubits) {
            return false;
        }
        self.instructions
            .get(name)
            .is_some_and(|inst| inst.supports(qargs))
    }

    /// Whether every calibrated pair of `name` also appears mirrored.
    ///
    /// Global instructions are symmetric; unknown names are not.
    pub fn is_symmetric(&self, name: &str) -> bool {
        let Some(instruction) = self.instructions.get(name) else {
            return false;
        };
        instruction
            .qargs()
            .filter(|q| q.arity() == 2)
            .all(|q| instruction.supports(q.reversed()))
    }

    /// Undirected qubit pairs touched by any calibrated two-qubit entry,
    /// normalized so the smaller index comes first.
    pub fn coupling_pairs(&self) -> BTreeSet<(u32, u32)> {
        self.instructions
            .values()
            .flat_map(Instruction::qargs)
            .filter_map(|q| match q {
                Qargs::Pair(a, b) => Some((a.min(b), a.max(b))),
                Qargs::Single(_) => None,
            })
            .collect()
    }

    /// Re-check every invariant on the assembled model.
    pub fn validate(&self) -> TargetResult<()> {
        for instruction in self.instructions.values() {
            match &instruction.support {
                InstructionSupport::Global => self.check_global(&instruction.operation)?,
                InstructionSupport::Qargs(map) => {
                    if map.is_empty() {
                        return Err(TargetError::EmptyInstruction(
                            instruction.operation.name().to_string(),
                        ));
                    }
                    for (qargs, props) in map {
                        self.check_entry(&instruction.operation, *qargs, props.as_ref())?;
                    }
                }
            }
        }
        Ok(())
    }

    fn ensure_new(&self, name: &str) -> TargetResult<()> {
        if self.instructions.contains_key(name) {
            return Err(TargetError::DuplicateInstruction(name.to_string()));
        }
        Ok(())
    }

    fn check_global(&self, operation: &Operation) -> TargetResult<()> {
        match operation.num_qubits() {
            Some(arity) if arity > self.num_qubits => Err(TargetError::TargetTooSmall {
                operation: operation.name().to_string(),
                arity,
                num_qubits: self.num_qubits,
            }),
            _ => Ok(()),
        }
    }

    fn check_entry(
        &self,
        operation: &Operation,
        qargs: Qargs,
        properties: Option<&InstructionProperties>,
    ) -> TargetResult<()> {
        let name = operation.name();
        if let Some(expected) = operation.num_qubits() {
            if expected != qargs.arity() {
                return Err(TargetError::ArityMismatch {
                    operation: name.to_string(),
                    expected,
                    found: qargs.arity(),
                });
            }
        }
        if let Some(qubit) = qargs.qubits().find(|&q| q >= self.num_qubits) {
            return Err(TargetError::QubitOutOfRange {
                operation: name.to_string(),
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        if let Qargs::Pair(a, b) = qargs {
            if a == b {
                return Err(TargetError::RepeatedQubit {
                    operation: name.to_string(),
                    qubit: a,
                });
            }
        }
        if let Some(props) = properties {
            props.check(name, qargs)?;
        }
        Ok(())
    }
}

mod qargs_map {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::QargsMap;
    use crate::properties::InstructionProperties;
    use crate::qargs::Qargs;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        qargs: Qargs,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        properties: Option<InstructionProperties>,
    }

    pub fn serialize<S: Serializer>(map: &QargsMap, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(map.iter().map(|(qargs, properties)| Entry {
            qargs: *qargs,
            properties: *properties,
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<QargsMap, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|e| (e.qargs, e.properties))
            .collect())
    }
}
