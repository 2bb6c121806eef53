// Domain layer: zoo entities and the ports (interfaces) the core services depend on.

pub mod model;
pub mod ports;
