use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::errors::BehaviorError;

/// The property behaviors this crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BehaviorKind {
    Lazy,
    AssignOnce,
    Synchronized,
    Observed,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 4] = [
        BehaviorKind::Lazy,
        BehaviorKind::AssignOnce,
        BehaviorKind::Synchronized,
        BehaviorKind::Observed,
    ];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            BehaviorKind::Lazy => "lazy",
            BehaviorKind::AssignOnce => "assign-once",
            BehaviorKind::Synchronized => "synchronized",
            BehaviorKind::Observed => "observed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BehaviorKind::Lazy =>
                "Defers computing the value until the first read, then caches it. \
                 Writes overwrite the cache. Single-threaded.",
            BehaviorKind::AssignOnce =>
                "Starts empty and may be assigned exactly once. Reading before the \
                 assignment or assigning twice is a fatal precondition violation.",
            BehaviorKind::Synchronized =>
                "Lazy initialization guarded by a mutex: concurrent first reads block \
                 and the initializer runs exactly once.",
            BehaviorKind::Observed =>
                "Always holds a value and runs will-set / did-set observers around \
                 every write.",
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BehaviorKind {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lazy" => Ok(BehaviorKind::Lazy),
            "assign-once" | "assign_once" | "initialized-later" | "delayed" =>
                Ok(BehaviorKind::AssignOnce),
            "synchronized" | "sync" => Ok(BehaviorKind::Synchronized),
            "observed" | "observer" => Ok(BehaviorKind::Observed),
            _ => Err(BehaviorError::UnknownBehavior(s.to_string())),
        }
    }
}
