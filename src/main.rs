fn main() -> anyhow::Result<()> {
    itembridge::cli::run()
}
