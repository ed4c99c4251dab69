//! Public library API for inspecting binary glTF (`.glb`) containers.

/// GLB header and chunk parsing, metadata decoding, and inspection reports.
pub mod glb;
