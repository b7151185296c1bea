pub mod property_behavior;

// Re-export traits
pub use property_behavior::PropertyBehavior;
