use colored::*;
use console::Term;
use textwrap::wrap;

use behaviors::models::slot::SlotState;

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width, indented by `indent` spaces
pub fn print_wrapped(text: &str, indent: usize) {
    let width = (Term::stdout().size().1 as usize).max(40);
    let padding = " ".repeat(indent);
    for line in wrap(text, width.saturating_sub(indent + 2)) {
        println!("{}{}", padding, line);
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a slot state with color
pub fn print_slot_state(state: SlotState) {
    match state {
        SlotState::Present => print_result("Slot", &"present".green().bold().to_string()),
        SlotState::Absent => print_result("Slot", &"absent".yellow().bold().to_string()),
    }
}
