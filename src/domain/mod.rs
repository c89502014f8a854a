// Domain layer: catalog records, allow-lists and the source trait. No I/O here.

pub mod catalog;
pub mod model;
pub mod ports;
