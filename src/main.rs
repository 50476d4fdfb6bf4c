fn main() {
    nutriguard_lib::run()
}
