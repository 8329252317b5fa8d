// Domain layer: the report model, the ports the pipeline talks through, and summation.

pub mod model;
pub mod ports;
pub mod services;
