use console::style;

/// Print a status update
pub fn status(msg: &str) {
    println!("{} {}", style("==>").green().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("::").blue().bold(), style(msg).dim());
}

/// Print a key-value field
pub fn field(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print the QR code followed by the URL it encodes
pub fn qr_banner(code: &str, url: &str) {
    println!("{code}");
    println!(
        "Scan QR code above or visit {}",
        style(url).cyan().underlined()
    );
    info("Waiting for connections...");
}
