use storefront_probe_lib::cli;

const SCRIPT: &str = "store-products";

#[tokio::main]
async fn main() {
    let Some(config) = cli::bootstrap(SCRIPT) else {
        return;
    };

    if let Err(err) = cli::run_store_products(&config, &mut std::io::stdout()).await {
        cli::report_failure(SCRIPT, &err);
    }
}
