fn main() {
    if let Err(e) = astar_check::run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
