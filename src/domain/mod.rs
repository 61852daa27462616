// Domain layer: employee model, department grouping and the ports the pipeline is built on.

pub mod department;
pub mod model;
pub mod ports;
