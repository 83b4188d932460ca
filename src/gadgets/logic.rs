//! Boolean negation and conjunction over `{0,1}` signals

use serde::{Deserialize, Serialize};

use crate::field::CircuitField;
use crate::r1cs::{ConstraintSystem, LinearCombination, Variable};
use crate::traits::Gadget;
use crate::witness::Hint;

/// `out = 1 - flag`
#[derive(Debug, Clone, Copy, Default)]
pub struct Not;

impl<F: CircuitField> Gadget<F> for Not {
    type Input = Variable;
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, flag: Variable) -> Variable {
        let negated = LinearCombination::one() - flag;
        let out = cs.alloc("out", Hint::Linear(negated.clone()));
        cs.enforce_equal("out", negated, out.into());
        out
    }
}

/// Shape of the multiplication chain that ANDs boolean flags
///
/// Both shapes use `len - 1` multiplication constraints and give the same
/// result; the tree only shortens the dependency chain.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AndFold {
    /// `acc[0] = flags[0]; acc[i] = acc[i-1]·flags[i]`
    #[default]
    Sequential,
    /// Pairwise products, level by level
    BalancedTree,
}

/// Product of boolean flags, `1` iff every flag is `1`
#[derive(Debug, Clone, Copy, Default)]
pub struct Conjunction {
    fold: AndFold,
}

impl Conjunction {
    pub fn new(fold: AndFold) -> Self {
        Self { fold }
    }
}

fn multiply<F: CircuitField>(cs: &mut ConstraintSystem<F>, name: &str, a: Variable, b: Variable) -> Variable {
    let product = cs.alloc(name, Hint::Product(a.into(), b.into()));
    cs.enforce(name, a.into(), b.into(), product.into());
    product
}

impl<F: CircuitField> Gadget<F> for Conjunction {
    type Input = Vec<Variable>;
    type Output = Variable;

    fn synthesize(&self, cs: &mut ConstraintSystem<F>, flags: Vec<Variable>) -> Variable {
        assert!(!flags.is_empty(), "conjunction of zero flags");

        match self.fold {
            AndFold::Sequential => {
                let mut acc = flags[0];
                for (i, flag) in flags.iter().enumerate().skip(1) {
                    acc = multiply(cs, &format!("acc[{i}]"), acc, *flag);
                }
                acc
            }
            AndFold::BalancedTree => {
                let mut level = flags;
                let mut depth = 0;
                while level.len() > 1 {
                    let mut next = Vec::with_capacity(level.len().div_ceil(2));
                    for (i, pair) in level.chunks(2).enumerate() {
                        match pair {
                            [a, b] => next.push(multiply(cs, &format!("level[{depth}][{i}]"), *a, *b)),
                            [a] => next.push(*a),
                            _ => unreachable!("chunks(2) yields one or two items"),
                        }
                    }
                    level = next;
                    depth += 1;
                }
                level[0]
            }
        }
    }
}
