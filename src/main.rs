fn main() {
    uhal_tools::app::cli::run();
}
