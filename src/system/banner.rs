use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

/// Each row is split into the "g" half and the "0" half.
const LOGO_ROWS: [(&str, &str); 5] = [
    ("    ______  ", "  ____ "),
    ("   / ____/  ", " / __ \\"),
    ("  / / __    ", "/ / / /"),
    (" / /_/ /    ", "/ /_/ / "),
    (" \\____/     ", "\\____/  "),
];

pub(crate) fn print_cli_banner(no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();
    println!();
    for (left, right) in LOGO_ROWS {
        if use_color {
            println!("{}{}", left.with(Color::Cyan), right.with(Color::Yellow));
        } else {
            println!("{left}{right}");
        }
    }

    let description = format!(
        "g0 v{} | high-performance load tester",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    if use_color {
        println!("{}", description.with(Color::Green));
    } else {
        println!("{description}");
    }
    println!();
}
