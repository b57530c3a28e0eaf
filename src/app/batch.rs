//! Batch mode: fetch every URL found in the data file, one at a time.

use std::path::Path;

use grabber_core::{Fetcher, extract_urls_from_file};
use tracing::info;

use super::ProcessExit;
use super::report::{report_fetch, summary_line};

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BatchSummary {
    pub(crate) saved: usize,
    pub(crate) failed: usize,
}

/// Runs batch mode over `data_file`.
///
/// A missing file or a file without URLs is fatal and yields
/// [`ProcessExit::Failure`] before any request is made. Individual fetch
/// failures are reported and skipped.
pub(crate) async fn run_batch(fetcher: &Fetcher, data_file: &Path) -> ProcessExit {
    let name = display_name(data_file);

    if !data_file.exists() {
        let dir = data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        println!("Error: {name} file not found in {}", dir.display());
        return ProcessExit::Failure;
    }

    let urls = extract_urls_from_file(data_file);
    if urls.is_empty() {
        println!("No URLs found in {name}");
        return ProcessExit::Failure;
    }

    println!("Found {} URLs in {name}", urls.len());
    let summary = fetch_all(fetcher, &urls).await;
    println!();
    println!("{}", summary_line(summary.saved, summary.failed));
    info!(
        saved = summary.saved,
        failed = summary.failed,
        total = urls.len(),
        "Batch complete"
    );

    ProcessExit::Success
}

/// Fetches `urls` strictly in order, printing an `i/total` progress line for each.
pub(crate) async fn fetch_all(fetcher: &Fetcher, urls: &[String]) -> BatchSummary {
    let total = urls.len();
    let mut summary = BatchSummary::default();

    for (i, url) in urls.iter().enumerate() {
        println!("\nProcessing URL {}/{total}: {url}", i + 1);
        if report_fetch(&fetcher.fetch(url).await) {
            summary.saved += 1;
        } else {
            summary.failed += 1;
        }
    }

    summary
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grabber_core::FetchConfig;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn fetcher_into(dir: &Path) -> Fetcher {
        Fetcher::new(FetchConfig::new(dir.join("output"))).unwrap()
    }

    #[tokio::test]
    async fn test_run_batch_missing_data_file_fails() {
        let temp = TempDir::new().unwrap();
        let fetcher = fetcher_into(temp.path());
        let exit = run_batch(&fetcher, &temp.path().join("data.txt")).await;
        assert_eq!(exit, ProcessExit::Failure);
    }

    #[tokio::test]
    async fn test_run_batch_no_urls_fails_without_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("data.txt");
        std::fs::write(&data_file, "nothing here, not even example.com").unwrap();

        let exit = run_batch(&fetcher_into(temp.path()), &data_file).await;
        assert_eq!(exit, ProcessExit::Failure);
        assert!(!temp.path().join("output").exists());
    }

    #[tokio::test]
    async fn test_fetch_all_continues_after_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok.json"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(br#"{"ok":true}"#.to_vec()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let urls = vec![
            format!("{}/missing", server.uri()),
            format!("{}/ok.json", server.uri()),
            "not a url".to_string(),
        ];

        let summary = fetch_all(&fetcher_into(temp.path()), &urls).await;
        assert_eq!(summary, BatchSummary { saved: 1, failed: 2 });
    }

    #[tokio::test]
    async fn test_run_batch_succeeds_even_when_all_fetches_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("data.txt");
        std::fs::write(&data_file, format!("{0}/a\n{0}/b\n", server.uri())).unwrap();

        let exit = run_batch(&fetcher_into(temp.path()), &data_file).await;
        assert_eq!(exit, ProcessExit::Success);
    }

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/opt/grabber/data.txt")), "data.txt");
    }
}
