// Domain layer: form models and ports (interfaces) to external systems.

pub mod model;
pub mod ports;
