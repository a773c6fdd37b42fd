mod app;
mod effects;
mod logging;
mod render;

fn main() -> anyhow::Result<()> {
    app::run()
}
