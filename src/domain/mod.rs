// Domain layer: catalog records and ports. No I/O here.

pub mod model;
pub mod ports;
