//! circom-style `.sym` symbol table
//!
//! One line per signal: `label,wire,component,main.<name>`. Components are
//! numbered by first appearance of each namespace.

use std::collections::HashMap;
use std::io::{self, Write};

use ark_ff::Field;

use crate::r1cs::CircuitDescription;

fn component_of(name: &str) -> &str {
    name.rsplit_once('.').map_or("", |(scope, _)| scope)
}

pub fn write_sym<F: Field, W: Write>(circuit: &CircuitDescription<F>, out: &mut W) -> io::Result<()> {
    let mut components: HashMap<&str, usize> = HashMap::new();
    for (wire, signal) in circuit.signals().iter().enumerate().skip(1) {
        let next = components.len();
        let component = *components.entry(component_of(&signal.name)).or_insert(next);
        writeln!(out, "{wire},{wire},{component},main.{}", signal.name)?;
    }
    Ok(())
}
