fn main() -> anyhow::Result<()> {
    marketplace_filter::cli::run()
}
