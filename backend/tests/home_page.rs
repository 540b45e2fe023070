use axum::http::StatusCode;
use chrono::Datelike;
use longweekend_backend::{services::holiday_source::HolidaySourceStub, utils::time::today_local};

mod support;
use support::{get_text, test_app};

fn current_year() -> i32 {
    today_local(&chrono_tz::UTC).year()
}

#[tokio::test]
async fn form_is_rendered_without_parameters() {
    let (status, html) = get_text(test_app(HolidaySourceStub::new()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<form method=\"get\" action=\"/\">"));
    assert!(!html.contains("<table>"));
    assert!(!html.contains("class=\"error\""));
}

#[tokio::test]
async fn blank_country_code_only_renders_form() {
    let (status, html) = get_text(
        test_app(HolidaySourceStub::new()),
        "/?country_code=&action=all",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("class=\"error\""));
    assert!(!html.contains("class=\"message\""));
}

#[tokio::test]
async fn all_action_lists_every_window() {
    let year = current_year();
    let holidays: Vec<String> = (1..=12).map(|m| format!("{}-{:02}-15", year, m)).collect();
    let stub = HolidaySourceStub::new().with_dates(
        "GB",
        year,
        holidays.iter().map(String::as_str),
    );

    let (status, html) = get_text(test_app(stub), "/?country_code=gb&action=all").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("value=\"GB\""));
    // Every weekday falls on the 15th of some month each year.
    assert!(html.contains("<table>"));
    assert!(html.contains(&format!("<td>{}-", year)));
}

#[tokio::test]
async fn all_action_without_windows_shows_message() {
    let year = current_year();
    let stub = HolidaySourceStub::new().with_dates(
        "GB",
        year,
        [format!("{}-12-25", year - 1).as_str()],
    );

    let (_, html) = get_text(test_app(stub), "/?country_code=GB&action=all").await;

    assert!(html.contains("No long weekends found."));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn next_action_without_upcoming_window_shows_message() {
    let year = current_year();
    let stub = HolidaySourceStub::new().with_dates(
        "GB",
        year,
        [format!("{}-12-25", year - 1).as_str()],
    );

    let (_, html) = get_text(test_app(stub), "/?country_code=GB&action=next").await;

    assert!(html.contains("No upcoming long weekends."));
}

#[tokio::test]
async fn missing_data_is_shown_inline() {
    let (status, html) = get_text(
        test_app(HolidaySourceStub::new()),
        "/?country_code=zz&action=all",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No holiday data for &#x27;ZZ&#x27;"));
}

#[tokio::test]
async fn upstream_failure_is_shown_inline_with_status() {
    let stub = HolidaySourceStub::new().with_status("GB", current_year(), 503);

    let (status, html) = get_text(test_app(stub), "/?country_code=GB&action=next").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Error fetching holidays (status 503)"));
}

#[tokio::test]
async fn unknown_action_and_bad_country_are_reported() {
    let (_, html) = get_text(
        test_app(HolidaySourceStub::new()),
        "/?country_code=GB&action=later",
    )
    .await;
    assert!(html.contains("Unknown action &#x27;later&#x27;"));

    let (_, html) = get_text(
        test_app(HolidaySourceStub::new()),
        "/?country_code=%3Cb%3E&action=all",
    )
    .await;
    assert!(html.contains("Invalid country code &#x27;&lt;B&gt;&#x27;"));
    assert!(!html.contains("<B>"));
}
