fn main() -> anyhow::Result<()> {
    roster_app::run()
}
