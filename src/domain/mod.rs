// Domain layer: song model and the ports the core talks through.

pub mod model;
pub mod ports;
