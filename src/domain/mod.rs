// Domain layer: the record table, the output layout and the ports the pipeline depends on.

pub mod model;
pub mod ports;
