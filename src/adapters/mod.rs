// Adapters layer: concrete implementations for external systems.

pub mod gitlab;

pub use gitlab::GitLabClient;
