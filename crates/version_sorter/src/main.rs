use anyhow::Context;
use anyhow::Result;

fn main() -> Result<()> {

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("VERSION_SORTER_LOG"))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let matches = version_sorter::get_cli().get_matches_from(wild::args());
    version_sorter::main_cli(&matches, std::io::stdout().lock())
}
