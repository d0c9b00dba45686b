//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Grover controlled-diffuser circuit builder",
        style("CUs").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  cus-ir        Circuit intermediate representation");
    println!("  cus-diffuser  Controlled diffuser and gate counter");
    println!("  cus-qasm3     OpenQASM 3 emitter");
    println!("  cus-cli       Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
