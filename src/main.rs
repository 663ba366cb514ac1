fn main() {
    std::process::exit(reposcrab::app::startup::startup());
}
