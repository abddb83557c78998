use rechercher::rechercher;

fn main() {
    if let Err(e) = rechercher() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
