use pendlab::Session;

fn main() {
    if let Err(e) = Session::new().with_initial_angle(0.6).run() {
        eprintln!("pendlab: {e}");
        std::process::exit(1);
    }
}
