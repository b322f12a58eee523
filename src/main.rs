fn main() {
    storectl::app::cli::run();
}
