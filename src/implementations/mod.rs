pub mod lazy;
pub mod assign_once;
pub mod synchronized;
pub mod observed;

pub use lazy::Lazy;
pub use assign_once::AssignOnce;
pub use synchronized::Synchronized;
pub use observed::Observed;
