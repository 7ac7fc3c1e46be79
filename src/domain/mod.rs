// Domain layer: entity models and ports (interfaces). No dependencies on
// the concrete store or any adapter.

pub mod model;
pub mod ports;
