fn main() {
    if let Err(err) = symkeys::run() {
        eprintln!("{}", symkeys::format_error(&err));
        std::process::exit(1);
    }
}
