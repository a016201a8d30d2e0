// Domain layer: value types and ports. The codec in `core` works on these.

pub mod model;
pub mod ports;
