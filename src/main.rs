fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .env()
        .init()?;

    let channels = raisehand_bridge::BridgeChannels::default();
    raisehand_backend::run(channels.backend_rx, channels.backend_tx);
    raisehand_frontend::run(channels.frontend_rx, channels.frontend_tx)
}
