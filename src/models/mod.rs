// Re-export all models from their respective modules
pub mod gear;
pub mod issue;
pub mod member;
pub mod reply;

// Re-export commonly used models
pub use gear::*;
pub use issue::*;
pub use member::*;
pub use reply::*;
