fn main() {
    flalias::run_cli();
}
