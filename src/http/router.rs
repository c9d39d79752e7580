use axum::{Router, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::error::handle_panic;
use super::handlers;
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_room_schedule))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::aggregate::ScheduleOptions;
    use crate::rooms::time::TimeFormat;
    use crate::services::roster_api::{ClassRecord, ClassSection, EnrollGroup, Meeting, RosterApi};
    use crate::subjects::SubjectList;
    use anyhow::{Result, anyhow};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct CsOnlyRoster;

    #[async_trait::async_trait]
    impl RosterApi for CsOnlyRoster {
        async fn list_subjects(&self, _term: &str) -> Result<Vec<String>> {
            Ok(vec!["CS".into()])
        }

        async fn list_classes(&self, _term: &str, subject: &str) -> Result<Vec<ClassRecord>> {
            match subject {
                "CS" => Ok(vec![ClassRecord {
                    subject: Some("CS".into()),
                    catalog_nbr: Some("2110".into()),
                    enroll_groups: vec![EnrollGroup {
                        class_sections: vec![ClassSection {
                            meetings: vec![Meeting {
                                bldg_descr: Some("Gates Hall".into()),
                                facility_descr: Some("Gates Hall G01".into()),
                                time_start: Some("9:00AM".into()),
                                time_end: Some("9:50AM".into()),
                                start_dt: Some("2024-01-22".into()),
                                end_dt: Some("2024-05-10".into()),
                                pattern: Some("MWF".into()),
                            }],
                        }],
                    }],
                }]),
                "BOOM" => panic!("roster blew up"),
                other => Err(anyhow!("no classes for {other}")),
            }
        }
    }

    fn app(subjects: &[&str], options: ScheduleOptions) -> Router {
        let list = SubjectList::from(subjects.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        create_router(AppState::new(Arc::new(CsOnlyRoster), list, options))
    }

    async fn get_root(app: Router) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn expected(start: &str, end: &str) -> serde_json::Value {
        json!({
            "Gates Hall": {
                "G01": [{
                    "className": "CS 2110",
                    "startTime": start,
                    "endTime": end,
                    "startDate": "2024-01-22",
                    "endDate": "2024-05-10",
                    "pattern": "MWF"
                }]
            }
        })
    }

    #[tokio::test]
    async fn test_returns_schedule_with_raw_times() {
        let (status, body) = get_root(app(&["CS"], ScheduleOptions::default())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected("9:00AM", "9:50AM"));
    }

    #[tokio::test]
    async fn test_returns_schedule_with_24_hour_times() {
        let options = ScheduleOptions {
            time_format: TimeFormat::TwentyFourHour,
            ..Default::default()
        };
        let (status, body) = get_root(app(&["CS"], options)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected("09:00", "09:50"));
    }

    #[tokio::test]
    async fn test_empty_subject_list_returns_empty_object() {
        let (status, body) = get_root(app(&[], ScheduleOptions::default())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn test_failing_subject_does_not_fail_request() {
        let (status, body) = get_root(app(&["MISSING", "CS"], ScheduleOptions::default())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected("9:00AM", "9:50AM"));
    }

    #[tokio::test]
    async fn test_aggregation_failure_returns_generic_500() {
        let options = ScheduleOptions {
            concurrency: 2,
            ..Default::default()
        };
        let (status, body) = get_root(app(&["CS", "BOOM"], options)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Failed to fetch and organize data for all buildings" })
        );
    }

    #[tokio::test]
    async fn test_panic_with_sequential_fetching_returns_generic_500() {
        let (status, body) = get_root(app(&["CS", "BOOM"], ScheduleOptions::default())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Failed to fetch and organize data for all buildings" })
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app(&["CS"], ScheduleOptions::default())
            .oneshot(Request::get("/rooms").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
