use clap::Parser as _;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("story_toggle=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = story_toggle::CliArgs::parse();
    story_toggle::run(args)
}
