// utils/display.rs

//! # Display Utility Module
//!
//! This module provides utility functions for rendering messages with various
//! styles including a Unicode-styled banner box and color-coded output for
//! errors, success messages, and informational messages. It leverages the
//! `colored` crate for styling and the `unicode_width` crate for handling
//! Unicode text width, so emoji in banners line up correctly.
//!
//! ## Example Usage
//! ```rust
//! use crate::utils::display::print_unicode_box;
//!
//! print_unicode_box("🔧 Setting up pipeline environment...");
//! print_info!("GIT_BRANCH: master");
//! print_success!("Wrote .env.pact");
//! ```

use unicode_width::UnicodeWidthStr;

/// Print a single-line message inside a Unicode-styled banner box, sized by
/// the visual width of the text rather than its byte length.
pub fn print_unicode_box(message: &str) {
    let border_color = "\x1b[93m"; // Yellow
    let reset_color = "\x1b[0m";

    let width = UnicodeWidthStr::width(message);

    println!("{}┌{}┐{}", border_color, "─".repeat(width + 2), reset_color);
    println!("{}│ {} │{}", border_color, message, reset_color);
    println!("{}└{}┘{}", border_color, "─".repeat(width + 2), reset_color);
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).blue())
    }};
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{}", format!($($arg)*).red())
    }};
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).green())
    }};
}
