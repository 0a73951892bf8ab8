//! Terminal title updates while a sweep is running

use std::io::{IsTerminal, Write};

/// Sets the terminal title to the specified text
/// Does nothing when stdout is not a terminal, so piped output stays clean
pub fn set_terminal_title(title: &str) {
    if std::io::stdout().is_terminal() {
        // ANSI escape sequence to set terminal title
        print!("\x1b]0;{title}\x07");
    }
}

/// Sets the terminal title and ensures it's flushed to the terminal
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    // A failed flush only loses the title update
    let _ = std::io::stdout().flush();
}
