//! Printable description of a constructed lattice

use anyhow::Result;
use lattices_core::stringify;
use lattices_engine::{Element, Label, Lattice, LatticeConfig};
use std::fmt;

pub struct Summary {
    pub nodes: usize,
    cover_edges: usize,
    top: String,
    bottom: String,
    valid: bool,
    /// `None` when the order is not a lattice
    distributive: Option<bool>,
    modular: Option<bool>,
    join_irreducibles: Vec<String>,
    meet_irreducibles: Vec<String>,
}

impl Summary {
    /// Describe `lattice`, rendering labels with `labels` when given and the
    /// lattice's own configuration otherwise
    pub fn of<T: Element + Label>(
        lattice: &Lattice<T>,
        labels: Option<&LatticeConfig>,
    ) -> Result<Self> {
        let config = labels.unwrap_or_else(|| lattice.config());
        let render = |nodes: Vec<&T>| -> Vec<String> {
            nodes.into_iter().map(|node| stringify(node, config)).collect()
        };

        let valid = lattice.validate();
        let (distributive, modular) = if valid {
            (Some(lattice.is_distributive()?), Some(lattice.is_modular()?))
        } else {
            (None, None)
        };

        Ok(Self {
            nodes: lattice.len(),
            cover_edges: lattice.cover_edges().len(),
            top: stringify(lattice.top(), config),
            bottom: stringify(lattice.bottom(), config),
            valid,
            distributive,
            modular,
            join_irreducibles: render(lattice.join_irreducibles()),
            meet_irreducibles: render(lattice.meet_irreducibles()),
        })
    }
}

fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "n/a",
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:             {}", self.nodes)?;
        writeln!(f, "cover edges:       {}", self.cover_edges)?;
        writeln!(f, "top:               {}", self.top)?;
        writeln!(f, "bottom:            {}", self.bottom)?;
        writeln!(f, "lattice:           {}", yes_no(Some(self.valid)))?;
        writeln!(f, "distributive:      {}", yes_no(self.distributive))?;
        writeln!(f, "modular:           {}", yes_no(self.modular))?;
        writeln!(f, "join-irreducibles: {}", self.join_irreducibles.join(" "))?;
        writeln!(f, "meet-irreducibles: {}", self.meet_irreducibles.join(" "))
    }
}
