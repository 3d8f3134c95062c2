fn main() {
    local_package_updater::run_cli();
}
