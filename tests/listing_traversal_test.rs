use boxoffice_etl::domain::ports::DocumentStore;
use boxoffice_etl::{CatalogError, ListingParser, LocalDocumentStore};
use tempfile::TempDir;

fn listing_page(rows: &str) -> String {
    format!(
        "<html><body><table>\
         <tr><th><span>Rank</span></th><th><span>Title</span></th>\
         <th><span>Worldwide Lifetime Gross</span></th>\
         <th><span>Domestic Lifetime Gross</span></th><th><span>Domestic %</span></th>\
         <th><span>Foreign Lifetime Gross</span></th><th><span>Foreign %</span></th>\
         <th><span>Year</span></th></tr>{rows}</table></body></html>"
    )
}

fn chart_row(rank: u32, title: &str, worldwide: &str, year: u16) -> String {
    format!(
        "<tr><td>{rank}</td><td><a href=\"/title/tt{rank:07}/\">{title}</a></td>\
         <td>{worldwide}</td><td>$100</td><td>50%</td><td>$100</td><td>50%</td>\
         <td>{year}</td></tr>"
    )
}

#[test]
fn traversal_concatenates_windows_in_file_name_order() {
    let dir = TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path());
    store.ensure_dirs().unwrap();

    // Written out of order on purpose; the reader must sort by name.
    store
        .write_listing(
            "offset-200.html",
            listing_page(&format!(
                "{}{}",
                chart_row(201, "Third", "$300", 2003),
                chart_row(202, "Fourth", "$400", 2004)
            ))
            .as_bytes(),
        )
        .unwrap();
    store
        .write_listing(
            "offset-0.html",
            listing_page(&format!(
                "{}{}",
                chart_row(1, "First", "$100", 2001),
                chart_row(2, "Second", "-", 2002)
            ))
            .as_bytes(),
        )
        .unwrap();

    let records = ListingParser::new().unwrap().read_all(&store).unwrap();

    let ranks: Vec<u32> = records.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 201, 202]);

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third", "Fourth"]);

    assert_eq!(records[0].worldwide_gross, Some(100));
    assert_eq!(records[1].worldwide_gross, None);
}

#[test]
fn traversal_is_restartable() {
    let dir = TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path());
    store.ensure_dirs().unwrap();
    store
        .write_listing(
            "offset-0.html",
            listing_page(&chart_row(1, "Only", "$1", 2001)).as_bytes(),
        )
        .unwrap();

    let parser = ListingParser::new().unwrap();
    let first = parser.read_all(&store).unwrap();
    let second = parser.read_all(&store).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_malformed_row_aborts_the_whole_traversal() {
    let dir = TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path());
    store.ensure_dirs().unwrap();

    store
        .write_listing(
            "offset-0.html",
            listing_page(&chart_row(1, "Fine", "$1", 2001)).as_bytes(),
        )
        .unwrap();
    // Second window holds a truncated row.
    store
        .write_listing(
            "offset-200.html",
            listing_page("<tr><td>201</td><td><a href=\"/x\">Broken</a></td></tr>").as_bytes(),
        )
        .unwrap();

    let err = ListingParser::new()
        .unwrap()
        .read_all(&store)
        .unwrap_err();
    assert!(matches!(err, CatalogError::MalformedRow { .. }));
}
