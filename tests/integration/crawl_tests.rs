//! Integration tests for the scraper
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, including the written JSON document.

use campaign_sites::config::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};
use campaign_sites::crawler::{crawl, Coordinator, HttpFetcher};
use campaign_sites::{Category, ScrapeError};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, json_path: &str) -> Config {
    Config {
        site: SiteConfig {
            base_url: format!("{}/", base_url),
            house_index: "congress.htm".to_string(),
            senate_index: "senate.htm".to_string(),
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        crawler: CrawlerConfig {
            request_interval_ms: 10, // Very short for testing
            timeout_secs: 5,
            party: "D".to_string(),
        },
        output: OutputConfig {
            json_path: json_path.to_string(),
        },
    }
}

async fn mount_page(server: &MockServer, page: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_site(server: &MockServer) {
    mount_page(
        server,
        "/congress.htm",
        200,
        r#"<html><body>
            <a href="tx.htm">Texas</a>
            <a href="ny.htm">New York</a>
            <a href="ny.htm">NY again</a>
            <a href="index.htm">Home</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/senate.htm",
        200,
        r#"<html><body><a href="ny.htm">New York</a></body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/ny.htm",
        200,
        r#"<html><body><ul>
            <li>Jane Doe (D) - Incumbent <a href="http://janedoe.com">Website</a></li>
            <li>John Roe (R) <a href="http://johnroe.com">Website</a></li>
            <li>Al Fry (D) <a href="fry.htm">Website</a></li>
        </ul></body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/tx.htm",
        200,
        r#"<html><body><ul>
            <li>Bo Ray (D) <a href="https://boray.org">Website</a></li>
            <li>Sam Poe (D) - no website</li>
        </ul></body></html>"#,
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_writes_document() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_site(&mock_server).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let json_path = dir.path().join("dem_campaign_sites.json");
    let config = create_test_config(&base_url, json_path.to_str().unwrap());

    let report = crawl(&config).await.expect("Crawl failed");

    let written: Value = serde_json::from_str(
        &std::fs::read_to_string(&json_path).expect("Output file missing"),
    )
    .expect("Output is not JSON");

    let ny = format!("{}/ny.htm", base_url);
    let tx = format!("{}/tx.htm", base_url);

    assert_eq!(
        written,
        json!({
            "house": [
                {"state_page": ny, "candidate": "Jane Doe", "website": "http://janedoe.com", "state": "NY"},
                {"state_page": ny, "candidate": "Al Fry", "website": "fry.htm", "state": "NY"},
                {"state_page": tx, "candidate": "Bo Ray", "website": "https://boray.org", "state": "TX"},
            ],
            "senate": [
                {"state_page": ny, "candidate": "Jane Doe", "website": "http://janedoe.com", "state": "NY"},
                {"state_page": ny, "candidate": "Al Fry", "website": "fry.htm", "state": "NY"},
            ]
        })
    );

    let house = report.category(Category::House).expect("No house report");
    assert_eq!(house.pages_discovered, 2);
    assert_eq!(house.candidates, 3);
    assert_eq!(report.total_failures(), 0);
}

#[tokio::test]
async fn test_state_page_error_does_not_abort() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/congress.htm",
        200,
        r#"<a href="ak.htm">AK</a><a href="ny.htm">NY</a><a href="tx.htm">TX</a>"#,
    )
    .await;
    mount_page(&mock_server, "/senate.htm", 200, "<p>none</p>").await;
    mount_page(&mock_server, "/ak.htm", 200, "<li>Ann Lee (D) <a href='lee.com'>x</a></li>").await;
    mount_page(&mock_server, "/ny.htm", 500, "Internal Server Error").await;
    mount_page(&mock_server, "/tx.htm", 200, "<li>Bo Ray (D) <a href='bo.com'>x</a></li>").await;

    let config = create_test_config(&base_url, "unused.json");
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler).unwrap();
    let mut coordinator = Coordinator::new(&config, fetcher).unwrap();

    let report = coordinator.run().await.expect("Run should survive a state page error");

    let names: Vec<_> = report
        .result
        .records(Category::House)
        .iter()
        .map(|r| r.candidate())
        .collect();
    assert_eq!(names, vec!["Ann Lee", "Bo Ray"]);

    let house = report.category(Category::House).unwrap();
    assert_eq!(house.pages_failed(), 1);
    assert_eq!(house.failures[0].url, format!("{}/ny.htm", base_url));
    assert!(house.failures[0].message.contains("500"));
}

#[tokio::test]
async fn test_index_failure_writes_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/congress.htm", 200, r#"<a href="ny.htm">NY</a>"#).await;
    mount_page(&mock_server, "/ny.htm", 200, "<li>Jane Doe (D) <a href='x'>x</a></li>").await;
    mount_page(&mock_server, "/senate.htm", 404, "Not Found").await;

    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("out.json");
    let config = create_test_config(&base_url, json_path.to_str().unwrap());

    let err = crawl(&config).await.expect_err("Senate index failure must abort");
    assert!(matches!(err, ScrapeError::Fetch(_)));
    assert!(!json_path.exists(), "No document may be written on abort");
}

#[tokio::test]
async fn test_existing_document_is_overwritten() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/congress.htm", 200, "").await;
    mount_page(&mock_server, "/senate.htm", 200, "").await;

    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("out.json");
    std::fs::write(&json_path, r#"{"house": ["old"]}"#).unwrap();

    let config = create_test_config(&base_url, json_path.to_str().unwrap());
    crawl(&config).await.expect("Crawl failed");

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(written, json!({"house": [], "senate": []}));
}
