//! Traversal drill: nested loops vs. a flat pass over the same cube.

use gridkata_core::traverse::{flat_order, nested_order, zeroed_cube};
use gridkata_core::DrillConfig;

/// The two visit sequences over the drill cube.
#[derive(Debug)]
pub struct TraversalOutcome {
    pub nested: Vec<f64>,
    pub flat: Vec<f64>,
}

impl TraversalOutcome {
    /// True when both traversals visited the elements in the same order.
    pub fn orders_agree(&self) -> bool {
        self.nested == self.flat
    }
}

pub fn run_traversal(config: &DrillConfig) -> TraversalOutcome {
    let cube = zeroed_cube(config.cube_side);
    let outcome = TraversalOutcome {
        nested: nested_order(&cube),
        flat: flat_order(&cube),
    };
    log::info!(
        "[GridKata::Traversal] visited {} elements per traversal, orders agree: {}",
        outcome.nested.len(),
        outcome.orders_agree()
    );
    outcome
}

/// Emit each scalar, nested pass first, one value per line.
pub fn print_traversal(outcome: &TraversalOutcome) {
    for value in &outcome.nested {
        println!("{}", value);
    }
    for value in &outcome.flat {
        println!("{}", value);
    }
}
