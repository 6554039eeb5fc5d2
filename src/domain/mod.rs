// Domain layer: message and user models plus the ports the services are built on.

pub mod model;
pub mod ports;
