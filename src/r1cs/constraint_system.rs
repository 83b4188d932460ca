//! Circuit builder
//!
//! Gadgets allocate signals and emit rank-1 constraints `A·B = C` here. Each
//! non-input signal is allocated together with the [`Hint`] that computes its
//! value, so the constraint list and the witness program are produced by the
//! same walk over the circuit and can never drift apart.

use ark_ff::Field;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CircuitDescription, LinearCombination, Variable};
use crate::witness::Hint;

/// Visibility of a signal, in canonical wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// The constant-one wire at index 0
    Constant,
    PublicOutput,
    PublicInput,
    PrivateInput,
    Internal,
}

impl SignalKind {
    pub fn is_public(self) -> bool {
        matches!(self, SignalKind::PublicOutput | SignalKind::PublicInput)
    }

    pub fn is_input(self) -> bool {
        matches!(self, SignalKind::PublicInput | SignalKind::PrivateInput)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalInfo {
    pub name: String,
    pub kind: SignalKind,
}

/// `a · b = c`, tagged with the namespace that emitted it
#[derive(Debug, Clone)]
pub struct Constraint<F: Field> {
    pub a: LinearCombination<F>,
    pub b: LinearCombination<F>,
    pub c: LinearCombination<F>,
    pub label: String,
}

impl<F: Field> Constraint<F> {
    pub fn is_satisfied(&self, z: &[F]) -> bool {
        self.a.evaluate(z) * self.b.evaluate(z) == self.c.evaluate(z)
    }
}

#[derive(Debug, Clone)]
pub struct ConstraintSystem<F: Field> {
    /// `signals[i]` describes `Variable(i + 1)`
    signals: Vec<SignalInfo>,
    constraints: Vec<Constraint<F>>,
    hints: Vec<(Variable, Hint<F>)>,
    namespace: Vec<String>,
}

impl<F: Field> Default for ConstraintSystem<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> ConstraintSystem<F> {
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
            constraints: Vec::new(),
            hints: Vec::new(),
            namespace: Vec::new(),
        }
    }

    pub fn num_signals(&self) -> usize {
        self.signals.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Run `f` with `name` appended to the current namespace
    pub fn namespace<R>(&mut self, name: impl Into<String>, f: impl FnOnce(&mut Self) -> R) -> R {
        self.namespace.push(name.into());
        let result = f(self);
        self.namespace.pop();
        result
    }

    fn path(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.namespace.join("."), name)
        }
    }

    fn push_signal(&mut self, name: &str, kind: SignalKind) -> Variable {
        let name = self.path(name);
        if kind.is_input() {
            assert!(
                !self.signals.iter().any(|s| s.kind.is_input() && s.name == name),
                "duplicate input signal {name}"
            );
        }
        self.signals.push(SignalInfo { name, kind });
        Variable::new(self.signals.len())
    }

    pub fn alloc_private_input(&mut self, name: &str) -> Variable {
        self.push_signal(name, SignalKind::PrivateInput)
    }

    pub fn alloc_public_input(&mut self, name: &str) -> Variable {
        self.push_signal(name, SignalKind::PublicInput)
    }

    /// Public output computed by `hint`
    pub fn alloc_output(&mut self, name: &str, hint: Hint<F>) -> Variable {
        self.alloc_with_kind(name, SignalKind::PublicOutput, hint)
    }

    /// Internal signal computed by `hint`
    pub fn alloc(&mut self, name: &str, hint: Hint<F>) -> Variable {
        self.alloc_with_kind(name, SignalKind::Internal, hint)
    }

    fn alloc_with_kind(&mut self, name: &str, kind: SignalKind, hint: Hint<F>) -> Variable {
        let next = self.signals.len() + 1;
        assert!(
            hint.dependencies().all(|dep| dep.index() < next),
            "hint for {name} reads a signal that is not allocated yet"
        );
        let var = self.push_signal(name, kind);
        self.hints.push((var, hint));
        var
    }

    pub fn enforce(
        &mut self,
        name: &str,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) {
        let label = self.path(name);
        self.constraints.push(Constraint { a, b, c, label });
    }

    /// `lhs · 1 = rhs`
    pub fn enforce_equal(&mut self, name: &str, lhs: LinearCombination<F>, rhs: LinearCombination<F>) {
        self.enforce(name, lhs, LinearCombination::one(), rhs);
    }

    /// `v · (v - 1) = 0`
    pub fn enforce_boolean(&mut self, name: &str, var: Variable) {
        self.enforce(
            name,
            var.into(),
            LinearCombination::from(var) - LinearCombination::one(),
            LinearCombination::zero(),
        );
    }

    /// Move signals into canonical order `(1, outputs, public inputs,
    /// private inputs, internal)` and freeze the circuit.
    pub fn finalize(self) -> CircuitDescription<F> {
        let num_vars = self.signals.len() + 1;

        // Stable sort keeps allocation order within each kind.
        let mut order: Vec<usize> = (1..num_vars).collect();
        order.sort_by_key(|&raw| self.signals[raw - 1].kind);

        let mut map = vec![0usize; num_vars];
        for (position, &raw) in order.iter().enumerate() {
            map[raw] = position + 1;
        }

        let mut signals = vec![SignalInfo {
            name: "one".to_string(),
            kind: SignalKind::Constant,
        }];
        signals.extend(order.iter().map(|&raw| self.signals[raw - 1].clone()));

        let constraints: Vec<Constraint<F>> = self
            .constraints
            .iter()
            .map(|c| Constraint {
                a: c.a.remap(&map),
                b: c.b.remap(&map),
                c: c.c.remap(&map),
                label: c.label.clone(),
            })
            .collect();

        let steps: Vec<(Variable, Hint<F>)> = self
            .hints
            .iter()
            .map(|(var, hint)| (Variable::new(map[var.index()]), hint.remap(&map)))
            .collect();

        debug!(
            signals = num_vars,
            constraints = constraints.len(),
            hints = steps.len(),
            "finalized constraint system"
        );

        CircuitDescription::new(signals, constraints, steps)
    }
}
