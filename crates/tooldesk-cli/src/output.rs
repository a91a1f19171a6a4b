//! Printing helpers. Everything here writes to stdout; logs go to stderr.

/// One status line, tagged so it stands out from plain results.
pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

/// Pretty JSON for `--json` listings.
pub fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}
