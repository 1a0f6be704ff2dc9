fn main() -> anyhow::Result<()> {
    pathweave::cli::run()
}
