use clap::Parser;

use baoscrape::store::Store;
use baoscrape::{Crawl, server};

mod args;
use args::{Args, Command, build_config, convert_site};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Discover { opts } => {
            let site = convert_site(opts.site);
            let config = match build_config(&opts) {
                Ok(config) => config,
                Err(e) => {
                    ::log::error!("Invalid configuration: {}", e);
                    std::process::exit(1);
                }
            };
            print_webdriver_note();

            match Crawl::new(site).with_config(config).discover().await {
                Ok(urls) => println!("Discovered {} article locations for {}", urls.len(), site),
                Err(e) => {
                    ::log::error!("Discovery failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Crawl { opts } => {
            let site = convert_site(opts.site);
            let config = match build_config(&opts) {
                Ok(config) => config,
                Err(e) => {
                    ::log::error!("Invalid configuration: {}", e);
                    std::process::exit(1);
                }
            };
            print_webdriver_note();

            match Crawl::new(site).with_config(config).run().await {
                Ok(articles) => println!("Collected {} articles for {}", articles.len(), site),
                Err(e) => {
                    ::log::error!("Crawl failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Serve {
            site,
            host,
            port,
            data_dir,
        } => {
            let site = convert_site(site);
            let store = Store::new(&data_dir);
            if let Err(e) = server::serve(store, site, &host, port).await {
                ::log::error!("Labeling server failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_webdriver_note() {
    println!("Note: crawling requires a WebDriver server (e.g. ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );
}
