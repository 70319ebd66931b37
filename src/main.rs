const LISTEN_ADDR: &str = "127.0.0.1:8080";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = mandelplot::PlotConfig::standard()?;
    let presenter = mandelplot::HtmlPresenter::new(&config)?;

    mandelplot::run_server(LISTEN_ADDR, &config, &presenter)?;

    Ok(())
}
