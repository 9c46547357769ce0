use crate::terminal::{box_bottom, box_line, box_opt, box_top};

const OPTIONS: &[(&str, &str)] = &[
    ("-l, --length <N>", "Password length (default 16, at least 12 recommended)"),
    ("-n, --number <N>", "Number of passwords to generate"),
    ("-c, --classes <set>", "Character types: u=upper l=lower d=digits s=symbols (default ulds)"),
    ("--no-upper", "Exclude uppercase letters"),
    ("--no-lower", "Exclude lowercase letters"),
    ("--no-digits", "Exclude digits"),
    ("--no-symbols", "Exclude symbols"),
    ("-u, --unique", "No repeated characters"),
    ("-b, --board", "Copy to clipboard instead of printing"),
    ("-o, --output [path]", "Append to a file (default passwords.txt)"),
    ("-e, --entropy", "Show an entropy report on stderr"),
    ("--hw", "Use the cycle-counter generator instead of the OS CSPRNG"),
    ("-s, --save", "Save these options as defaults"),
    ("-d, --default", "Ignore saved defaults"),
    ("-q, --quiet", "Suppress warnings and confirmations"),
    ("-h, --help", "Show this help"),
    ("-v, --version", "Show version"),
];

pub fn print() {
    println!("{}", box_top("passforge"));
    println!(
        "{}",
        box_line("Passwords with at least one character of every selected type.")
    );
    println!("{}", box_line(""));
    println!("{}", box_line("Usage: passforge [options]"));
    println!("{}", box_line(""));
    for (flag, desc) in OPTIONS {
        for line in box_opt(flag, desc) {
            println!("{line}");
        }
    }
    println!("{}", box_line(""));
    println!("{}", box_line("Log filter: PASSFORGE_LOG=debug"));
    println!("{}", box_bottom());
}
