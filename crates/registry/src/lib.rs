//! IbanKit Registry - country structures, national algorithms, providers
//!
//! # Key Types
//! - `StructureRegistry`: country → BBAN layout, seeded from the built-in table
//! - `StructureProvider` / `AlgorithmProvider`: explicit registration points
//! - `IbanRegistry`: both registries behind one handle, built from providers
//! - `global()`: process-wide default, initialised exactly once

pub mod global;
pub mod provider;
pub mod registry;
pub mod structures;
pub mod table;

pub use global::{global, install};
pub use provider::{
    AlgorithmProvider, BuiltinAlgorithms, BuiltinStructures, StaticAlgorithms, StaticStructures,
    StructureProvider,
};
pub use registry::{IbanRegistry, IbanRegistryBuilder};
pub use structures::StructureRegistry;
pub use table::{builtin_structure, builtin_structures};
