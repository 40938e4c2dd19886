// Adapters layer: concrete transports for the ports in `domain::ports`.

pub mod http;
