use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use chrono_tz::{America::Vancouver, Tz};
use httpmock::prelude::*;
use sailings::{ScrapeError, ScrapingConfig, ScrapingContext, Terminals};

const CONDITIONS_PAGE: &str = r#"
<html><body>
  <div class="mobile-friendly-row"><p class="mobile-paragraph">Departure</p></div>
  <div class="mobile-friendly-row">
    <p class="mobile-paragraph">9:30 am
Coastal Renaissance</p>
    <span class="sailing-ferry-name">Coastal Renaissance</span>
    <span class="cc-vessel-percent-full">20%</span>
  </div>
</body></html>
"#;

const TIMETABLE_PAGE: &str = r#"
<html><body><form id="seasonalSchedulesForm">
  <table class="table-seasonal-schedule"><tbody>
    <tr class="schedule-table-row"><td>Mon</td><td>7:00 am</td><td>7:20 am</td></tr>
    <tr class="schedule-table-row"><td>Mon</td><td>3:00 pm</td><td>3:20 pm</td></tr>
  </tbody></table>
</form></body></html>
"#;

fn reference_time() -> DateTime<Tz> {
    Vancouver.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
}

fn terminals(routes: &[(&str, &[&str])]) -> Terminals {
    Terminals {
        routes: routes
            .iter()
            .map(|(departure, destinations)| {
                (
                    departure.to_string(),
                    destinations.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect(),
        ..Terminals::default()
    }
}

fn context_for(server: &MockServer, terminals: Terminals) -> ScrapingContext {
    let config = ScrapingConfig {
        base_url: server.base_url(),
        ..ScrapingConfig::default()
    };
    ScrapingContext::with_config(config, terminals).unwrap()
}

#[tokio::test]
async fn dispatches_each_terminal_to_its_page_layout() {
    let server = MockServer::start_async().await;
    let conditions = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/current-conditions/TSA-SWB")
                .header("user-agent", "Mozilla");
            then.status(200)
                .header("content-type", "text/html")
                .body(CONDITIONS_PAGE);
        })
        .await;
    let timetable = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/routes-fares/schedules/daily/BOW-HSB")
                .header("user-agent", "Mozilla");
            then.status(200)
                .header("content-type", "text/html")
                .body(TIMETABLE_PAGE);
        })
        .await;

    let context = context_for(&server, terminals(&[("TSA", &["SWB"]), ("BOW", &["HSB"])]));
    let schedule = context
        .scrape_routes_at(false, reference_time())
        .await
        .unwrap();

    conditions.assert_async().await;
    timetable.assert_async().await;

    let tsa = &schedule["TSA"]["SWB"];
    assert_eq!(tsa.sailings.len(), 1);
    assert_eq!(tsa.sailings[0].departure_date, "2026-10-19");
    assert_eq!(tsa.sailings[0].departure_time, "9:30 am");
    assert_eq!(tsa.sailings[0].vessel_name, "Coastal Renaissance");
    assert_eq!(tsa.sailings[0].fill, 80);
    assert!(!tsa.sailings[0].is_cancelled);

    let bow = &schedule["BOW"]["HSB"];
    let times: Vec<_> = bow
        .sailings
        .iter()
        .map(|s| (s.departure_time.as_str(), s.arrival_time.as_str()))
        .collect();
    assert_eq!(times, [("7:00 am", "7:20 am"), ("3:00 pm", "3:20 pm")]);
}

#[tokio::test]
async fn error_page_gives_an_empty_route_and_the_run_continues() {
    let server = MockServer::start_async().await;
    let broken = server
        .mock_async(|when, then| {
            when.method(GET).path("/current-conditions/TSA-SWB");
            then.status(503).body("<html><body>Service Unavailable</body></html>");
        })
        .await;
    let healthy = server
        .mock_async(|when, then| {
            when.method(GET).path("/current-conditions/TSA-DUK");
            then.status(200).body(CONDITIONS_PAGE);
        })
        .await;

    let context = context_for(&server, terminals(&[("TSA", &["SWB", "DUK"])]));
    let schedule = context
        .scrape_routes_at(false, reference_time())
        .await
        .unwrap();

    broken.assert_hits_async(1).await;
    healthy.assert_hits_async(1).await;
    assert!(schedule["TSA"]["SWB"].sailings.is_empty());
    assert_eq!(schedule["TSA"]["DUK"].sailings.len(), 1);
}

#[tokio::test]
async fn unreachable_host_aborts_the_run() {
    let config = ScrapingConfig {
        // Nothing listens on port 1.
        base_url: "http://127.0.0.1:1".to_string(),
        ..ScrapingConfig::default()
    };
    let context =
        ScrapingContext::with_config(config, terminals(&[("TSA", &["SWB", "DUK"])])).unwrap();

    match context.scrape_routes_at(false, reference_time()).await {
        Err(ScrapeError::Request { url, .. }) => {
            assert_eq!(url, "http://127.0.0.1:1/current-conditions/TSA-SWB");
        }
        other => panic!("expected request error, got {other:?}"),
    }
}

#[tokio::test]
async fn local_sample_feeds_both_layouts() {
    let config = ScrapingConfig {
        sample_site_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sample/sample-site.html"),
        ..ScrapingConfig::default()
    };
    let context =
        ScrapingContext::with_config(config, terminals(&[("TSA", &["SWB"]), ("FUL", &["SWB"])]))
            .unwrap();

    let schedule = context
        .scrape_routes_at(true, reference_time())
        .await
        .unwrap();

    let capacity = &schedule["TSA"]["SWB"].sailings;
    assert_eq!(capacity.len(), 4);
    assert_eq!(capacity[0].departure_time, "7:00 am");
    assert_eq!(capacity[0].vessel_name, "Spirit of British Columbia");
    assert_eq!(capacity[0].fill, 100);
    assert_eq!(capacity[1].fill, 65);
    assert!(capacity[2].is_cancelled);
    assert_eq!(capacity[3].departure_date, "2026-10-20");

    let seasonal = &schedule["FUL"]["SWB"].sailings;
    assert_eq!(seasonal.len(), 2);
    assert_eq!(seasonal[1].departure_time, "12:30 pm");
    assert_eq!(seasonal[1].arrival_time, "1:05 pm");
    assert!(seasonal.iter().all(|s| s.vessel_name.is_empty() && s.fill == 0));
}

#[tokio::test]
async fn missing_local_sample_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScrapingConfig {
        sample_site_path: dir.path().join("missing.html"),
        ..ScrapingConfig::default()
    };
    let context = ScrapingContext::with_config(config, Terminals::default()).unwrap();

    let result = context.scrape_routes(true).await;
    assert!(matches!(result, Err(ScrapeError::Fixture { .. })));
}

#[tokio::test]
async fn schedule_serializes_with_wire_names() {
    let config = ScrapingConfig {
        sample_site_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sample/sample-site.html"),
        ..ScrapingConfig::default()
    };
    let context = ScrapingContext::with_config(config, terminals(&[("NAN", &["HSB"])])).unwrap();
    let schedule = context
        .scrape_routes_at(true, reference_time())
        .await
        .unwrap();

    let json = serde_json::to_value(&schedule).unwrap();
    let first = &json["NAN"]["HSB"]["sailings"][0];
    assert_eq!(json["NAN"]["HSB"]["sailingDuration"], "");
    assert_eq!(first["date"], "2026-10-19");
    assert_eq!(first["time"], "7:00 am");
    assert_eq!(first["vesselName"], "Spirit of British Columbia");
    assert_eq!(first["isCancelled"], false);
    assert_eq!(first["fill"], 100);
    assert_eq!(first["arrivalTime"], "");
}
