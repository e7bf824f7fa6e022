use azure_mgmt_group_tf::config::Config;
use azure_mgmt_group_tf::logging::init_logging;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let result = match Config::from_env() {
        Ok(config) => azure_mgmt_group_tf::run(&config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        log::error!("ERROR: {e}");
        std::process::exit(1);
    }

    Ok(())
}
