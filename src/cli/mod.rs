use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "behaviors",
    about = "Reusable property behaviors: lazy, assign-once, synchronized and observed fields",
    version,
    author,
    long_about = None
)]
pub struct BehaviorsCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available property behaviors
    List,

    /// Run the demo scenario for one behavior
    Demo {
        /// Behavior to demonstrate (lazy, assign-once, synchronized, observed)
        behavior: String,

        /// Value produced by the initializer or assigned by the demo
        #[arg(short, long)]
        value: Option<String>,

        /// Number of reads to perform
        #[arg(short, long)]
        reads: Option<usize>,

        /// Reader threads for the synchronized demo
        #[arg(short, long)]
        threads: Option<usize>,

        /// Also provoke the contract violations and report them
        #[arg(short, long, default_value = "false")]
        misuse: bool,
    },
}
