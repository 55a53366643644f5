use std::path::PathBuf;
use std::time::Duration;

use boxoffice_etl::domain::model::FilmRecord;
use boxoffice_etl::domain::ports::DocumentStore;
use boxoffice_etl::{CatalogError, LocalDocumentStore, PageFetcher, Settings};
use httpmock::prelude::*;
use tempfile::TempDir;

fn settings(chart_url: String, base_url: String) -> Settings {
    Settings {
        data_dir: PathBuf::from("unused"),
        output: PathBuf::from("unused.csv"),
        chart_url,
        base_url,
        guide_url: "https://guide.example.com".to_string(),
        pace: Duration::ZERO,
    }
}

fn record(title: &str, detail_ref: &str) -> FilmRecord {
    FilmRecord {
        rank: 1,
        title: title.to_string(),
        detail_ref: detail_ref.to_string(),
        worldwide_gross: Some(1),
        domestic_gross: None,
        domestic_share: None,
        foreign_gross: None,
        foreign_share: None,
        year: 2001,
    }
}

#[tokio::test]
async fn caches_every_chart_window() {
    let dir = TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path());
    store.ensure_dirs().unwrap();

    let server = MockServer::start();
    let chart = server.mock(|when, then| {
        when.method(GET).path("/chart/ww_top_lifetime_gross/");
        then.status(200).body("<table></table>");
    });

    let settings = settings(
        server.url("/chart/ww_top_lifetime_gross/"),
        server.base_url(),
    );
    let fetched = PageFetcher::new(&settings)
        .fetch_listing_windows(&store)
        .await
        .unwrap();

    assert_eq!(fetched, 5);
    assert_eq!(chart.hits(), 5);
    for offset in [0, 200, 400, 600, 800] {
        assert!(dir
            .path()
            .join("list")
            .join(format!("offset-{offset}.html"))
            .exists());
    }
}

#[tokio::test]
async fn skips_detail_pages_that_are_already_cached() {
    let dir = TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path());
    store.ensure_dirs().unwrap();
    store.write_detail("Cached Film", b"<html></html>").unwrap();

    let server = MockServer::start();
    let detail = server.mock(|when, then| {
        when.method(GET).path("/title/tt0000002/");
        then.status(200).body("<html>fresh</html>");
    });

    let records = [
        record("Cached Film", "/title/tt0000001/"),
        record("Face/Off", "/title/tt0000002/"),
    ];
    let settings = settings(server.url("/chart/"), server.base_url());
    let fetched = PageFetcher::new(&settings)
        .fetch_detail_pages(&store, &records)
        .await
        .unwrap();

    assert_eq!(fetched, 1);
    detail.assert();
    // The separator in the title must not create a subdirectory.
    assert!(dir.path().join("films").join("Face--Off.html").exists());
}

#[tokio::test]
async fn non_success_listing_response_is_fatal() {
    let dir = TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path());
    store.ensure_dirs().unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chart/ww_top_lifetime_gross/");
        then.status(503);
    });

    let settings = settings(
        server.url("/chart/ww_top_lifetime_gross/"),
        server.base_url(),
    );
    let err = PageFetcher::new(&settings)
        .fetch_listing_windows(&store)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Fetch { status: 503, .. }));
}
