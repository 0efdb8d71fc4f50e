use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use baoscrape::{CrawlError, CrawlerConfig, Site};

#[derive(Parser, Debug)]
#[command(name = "baoscrape")]
#[command(about = "Scrapes Vietnamese news sites and serves an article labeling UI")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Discover article locations and persist the frontier set
    Discover {
        #[command(flatten)]
        opts: CrawlOpts,
    },
    /// Crawl a site into its article collection file
    Crawl {
        #[command(flatten)]
        opts: CrawlOpts,
    },
    /// Serve the labeling web interface over a crawled collection
    Serve {
        /// Site whose collection to label
        #[arg(short, long, value_enum)]
        site: SiteArg,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 5000)]
        port: u16,

        /// Directory holding the persisted JSON files
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct CrawlOpts {
    /// Site to crawl
    #[arg(short, long, value_enum)]
    pub site: SiteArg,

    /// Configuration file (JSON); CLI flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frontier size limit
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Expand the link frontier beyond the seed page
    #[arg(short, long)]
    pub recursive: bool,

    /// Directory holding the persisted JSON files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// URL of the WebDriver instance
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Skip timed-out locations instead of aborting the batch
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SiteArg {
    Vnexpress,
    Baomoi,
}

/// Convert from CLI site argument to the internal site type
pub fn convert_site(arg: SiteArg) -> Site {
    match arg {
        SiteArg::Vnexpress => Site::VnExpress,
        SiteArg::Baomoi => Site::BaoMoi,
    }
}

/// Assemble the crawler configuration: file values first, CLI overrides on top
pub fn build_config(opts: &CrawlOpts) -> Result<CrawlerConfig, CrawlError> {
    let mut config = match &opts.config {
        Some(path) => CrawlerConfig::from_file(path)?,
        None => CrawlerConfig::default(),
    };

    if let Some(limit) = opts.limit {
        config.limit = limit;
    }
    if opts.recursive {
        config.recursive = true;
    }
    if let Some(data_dir) = &opts.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(webdriver_url) = &opts.webdriver_url {
        config.webdriver_url = webdriver_url.clone();
    }
    if opts.keep_going {
        config.abort_on_timeout = false;
    }

    Ok(config)
}
