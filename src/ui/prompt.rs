use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};

/// Asks for the resource folder when no positional argument was given.
/// Falls back to a plain line read when stdin is not a terminal, so piping
/// a path in still works.
pub fn prompt_for_directory() -> Result<String> {
    if io::stdin().is_terminal() {
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the resource folder path")
            .interact()
            .context("Failed to read resource folder path")?;
        return Ok(path);
    }

    print!("Enter the resource folder path: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read resource folder path")?;

    Ok(line.trim().to_string())
}

/// Holds the console open after a successful write so double-click users
/// can read the confirmation. Skipped when stdin is not a terminal.
pub fn pause_before_exit() {
    if !io::stdin().is_terminal() {
        return;
    }

    print!("\nPress Enter to exit...");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
