fn main() -> anyhow::Result<()> {
    catalog_viewer::run()
}
