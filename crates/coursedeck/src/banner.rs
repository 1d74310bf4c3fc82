use colored::Colorize;

pub fn print_banner_with_version() {
    println!(
        "{} {}",
        "coursedeck".bold().cyan(),
        env!("CARGO_PKG_VERSION")
    );
    println!("A markdown-based course slideshow viewer");
}
