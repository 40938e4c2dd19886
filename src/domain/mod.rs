// Domain layer: request/response values and the ports (transport + executor seams).

pub mod model;
pub mod ports;
