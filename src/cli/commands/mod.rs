//! Command implementations for the coref CLI

pub mod cluster;
pub mod split;
pub mod validate;

pub use cluster::ClusterArgs;
pub use split::SplitArgs;
pub use validate::ValidateArgs;
