use clap::Parser;
use tracing::info;

use boxoffice_etl::utils::logger;
use boxoffice_etl::{
    CatalogPipeline, Cli, Command, CsvSink, EtlEngine, HttpRatingSource, ListingParser,
    LocalDocumentStore, PageFetcher, Settings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.options.verbose);

    let settings = Settings::resolve(&cli.options)?;
    let store = LocalDocumentStore::new(&settings.data_dir);

    match cli.command {
        Command::FetchList => {
            store.ensure_dirs()?;
            let fetcher = PageFetcher::new(&settings);
            let windows = fetcher.fetch_listing_windows(&store).await?;
            info!(windows, "listing cache complete");
        }
        Command::FetchFilms => {
            store.ensure_dirs()?;
            let records = ListingParser::new()?.read_all(&store)?;
            let fetcher = PageFetcher::new(&settings);
            let fetched = fetcher.fetch_detail_pages(&store, &records).await?;
            info!(fetched, cached = records.len() - fetched, "film cache complete");
        }
        Command::Build => {
            let source = HttpRatingSource::new(&settings);
            let pipeline = CatalogPipeline::new(&store, source)?;
            let sink = CsvSink::create(&settings.output)?;
            let rows = EtlEngine::new(pipeline, sink).run().await?;
            info!(rows, output = %settings.output.display(), "catalog written");
        }
    }

    Ok(())
}
