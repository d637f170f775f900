fn main() {
    taigabot::app::cli::run();
}
