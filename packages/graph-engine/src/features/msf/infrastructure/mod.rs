pub mod prim_jarnik;

pub use prim_jarnik::{forest_weight, PrimJarnikMsf};
