fn main() -> anyhow::Result<()> {
    let cfg = server::load_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.server.worker_threads.unwrap_or(4))
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(cfg))
}
