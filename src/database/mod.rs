//! Database module providing organized access to all database operations
//!
//! This module is organized into several sub-modules:
//! - `connection`: Database connection management, pool configuration and migrations
//! - `members`: Member operations, including nested issue loading
//! - `gear`: Gear item type operations
//! - `issues`: Issue operations
//! - `service`: Main DatabaseService that provides a unified interface

pub mod connection;
pub mod gear;
pub mod issues;
pub mod members;
pub mod service;

// Re-export the main types and service for easy access
pub use connection::{DbConnection, DbPool, MIGRATIONS};
pub use service::DatabaseService;

pub use gear::GearOperations;
pub use issues::IssueOperations;
pub use members::MemberOperations;
