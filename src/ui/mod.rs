use colored::Colorize;

pub fn header(title: &str) {
    println!("\n{}", title.bold().underline());
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// One listing row: status marker, padded name, tier tag and detail.
pub fn plugin_row(installed: bool, name: &str, tier: &str, detail: &str) {
    let marker = if installed {
        "✓".green().bold()
    } else {
        "✗".bright_black().bold()
    };
    let name = format!("{:<8}", name);
    let name = if installed { name.bold() } else { name.bright_black() };
    println!("  {} {} {:<4}  {}", marker, name, tier.cyan(), detail.dimmed());
}
