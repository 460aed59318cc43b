// Domain layer: core models only. No external dependencies beyond std/serde.

pub mod model;
