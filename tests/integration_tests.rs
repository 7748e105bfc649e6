use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use mockito::Matcher;
use serde_json::json;

use bfl_rs::*;

fn fast_options() -> PollOptions {
    PollOptions::new(Duration::from_secs(5)).with_interval(Duration::from_millis(10))
}

// --- Submit tests ---

#[tokio::test]
async fn test_submit_returns_job_handle() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/flux-pro-1.1")
        .match_header("x-key", "test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "prompt": "A cat",
            "width": 1024,
            "height": 768,
            "safety_tolerance": 2
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"id": "job-1", "polling_url": "{}/v1/get_result?id=job-1"}}"#,
            server.url()
        ))
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let task = FluxPro11 {
        prompt: "A cat".to_string(),
        ..Default::default()
    };
    let handle = client.submit(&task).await.unwrap();

    assert_eq!(handle.id, "job-1");
    assert!(handle.polling_url.ends_with("/v1/get_result?id=job-1"));
    assert!(handle.webhook_url.is_none());
    assert_eq!(handle.family, TaskFamily::Generate);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_without_api_key_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = BflClient::new("").with_base_url(server.url());
    let result = client.submit(&FluxDev::default()).await;

    assert!(matches!(result, Err(BflError::MissingApiKey)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_surfaces_validation_errors_in_order() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/flux-dev")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "detail": [
                    {"loc": ["body", "width"], "msg": "must be a multiple of 32", "type": "value_error"},
                    {"loc": ["body", "steps"], "msg": "must be at most 50", "type": "value_error"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let result = client.submit(&FluxDev::default()).await;

    match result {
        Err(BflError::Validation(errors)) => {
            assert_eq!(errors.detail.len(), 2);
            assert_eq!(errors.detail[0].path(), "body.width");
            assert_eq!(errors.detail[1].path(), "body.steps");

            let rendered = errors.to_string();
            assert!(rendered.contains("Validation error (1/2): must be a multiple of 32"));
            assert!(rendered.contains("Validation error (2/2): must be at most 50"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_empty_validation_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/flux-dev")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": []}"#)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    match client.submit(&FluxDev::default()).await {
        Err(BflError::Validation(errors)) => {
            assert_eq!(errors.to_string(), "Validation error");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_http_error_carries_raw_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/flux-pro")
        .with_status(503)
        .with_body("upstream capacity exceeded")
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    match client.submit(&FluxPro::default()).await {
        Err(BflError::Http { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream capacity exceeded");
        }
        other => panic!("Expected Http, got {:?}", other),
    }
}

// --- Result snapshot tests ---

#[tokio::test]
async fn test_get_result_returns_in_flight_snapshot() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/get_result")
        .match_query(Matcher::UrlEncoded("id".into(), "abc".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "abc", "status": "Pending", "progress": 0.4}"#)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let envelope = client
        .get_result::<GenerateResult, GenerateDetails>("abc")
        .await
        .unwrap();

    assert_eq!(envelope.id, "abc");
    assert_eq!(envelope.status, JobStatus::Pending);
    assert_eq!(envelope.progress, Some(0.4));
    assert!(envelope.result.is_none());
    mock.assert_async().await;
}

// --- Polling tests ---

#[tokio::test]
async fn test_generate_polls_until_ready() {
    let mut server = mockito::Server::new_async().await;
    let submit_mock = server
        .mock("POST", "/v1/flux-dev")
        .match_header("x-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"id": "job-1", "polling_url": "{}/v1/get_result?id=job-1"}}"#,
            server.url()
        ))
        .create_async()
        .await;

    // Two in-flight snapshots, then the terminal envelope
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let poll_mock = server
        .mock("GET", "/v1/get_result")
        .match_query(Matcher::UrlEncoded("id".into(), "job-1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                br#"{"id": "job-1", "status": "Pending"}"#.to_vec()
            } else {
                json!({
                    "id": "job-1",
                    "status": "Ready",
                    "result": {
                        "prompt": "A cat",
                        "sample": "http://img/abc.jpg",
                        "seed": 7,
                        "start_time": 0.0,
                        "end_time": 1.0,
                        "duration": 1.0
                    }
                })
                .to_string()
                .into_bytes()
            }
        })
        .expect(3)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let task = FluxDev {
        prompt: "A cat".to_string(),
        ..Default::default()
    };
    let image = client.generate(&task, &fast_options()).await.unwrap();

    assert_eq!(image.sample_url, "http://img/abc.jpg");
    assert_eq!(image.seed, 7);
    assert_eq!(image.prompt, "A cat");
    submit_mock.assert_async().await;
    poll_mock.assert_async().await;
}

#[tokio::test]
async fn test_poll_tolerates_task_not_found_before_ready() {
    let mut server = mockito::Server::new_async().await;
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let poll_mock = server
        .mock("GET", "/v1/get_result")
        .match_query(Matcher::UrlEncoded("id".into(), "fresh".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |_| {
            // A just-submitted job can briefly report no result record
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                br#"{"status": "Task not found"}"#.to_vec()
            } else {
                br#"{"id": "fresh", "status": "Ready", "result": {"sample": "http://img/f.jpg"}}"#
                    .to_vec()
            }
        })
        .expect(2)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let handle = JobHandle {
        id: "fresh".to_string(),
        polling_url: format!("{}/v1/get_result?id=fresh", server.url()),
        webhook_url: None,
        family: TaskFamily::Generate,
    };
    let envelope = client
        .poll::<GenerateResult, GenerateDetails>(&handle, &fast_options())
        .await
        .unwrap();

    assert_eq!(envelope.status, JobStatus::Ready);
    assert_eq!(envelope.result.unwrap().sample_url, "http://img/f.jpg");
    poll_mock.assert_async().await;
}

#[tokio::test]
async fn test_poll_fails_on_content_moderation() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/get_result")
        .match_query(Matcher::UrlEncoded("id".into(), "job-mod".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "job-mod", "status": "Content Moderated"}"#)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let handle = JobHandle {
        id: "job-mod".to_string(),
        polling_url: format!("{}/v1/get_result?id=job-mod", server.url()),
        webhook_url: None,
        family: TaskFamily::Generate,
    };
    let result = client
        .poll::<GenerateResult, GenerateDetails>(&handle, &fast_options())
        .await;

    match result {
        Err(BflError::JobFailed { id, status }) => {
            assert_eq!(id, "job-mod");
            assert_eq!(status, JobStatus::ContentModerated);
        }
        other => panic!("Expected JobFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_poll_times_out_on_stuck_job() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/get_result")
        .match_query(Matcher::UrlEncoded("id".into(), "stuck".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "stuck", "status": "Pending"}"#)
        .expect_at_least(1)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let handle = JobHandle {
        id: "stuck".to_string(),
        polling_url: format!("{}/v1/get_result?id=stuck", server.url()),
        webhook_url: None,
        family: TaskFamily::Generate,
    };
    let options = PollOptions::new(Duration::from_millis(50)).with_interval(Duration::from_millis(10));
    let result = client
        .poll::<GenerateResult, GenerateDetails>(&handle, &options)
        .await;

    match result {
        Err(BflError::Timeout { waited }) => {
            assert!(waited >= Duration::from_millis(50));
        }
        other => panic!("Expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_poll_stops_on_cancellation() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/get_result")
        .match_query(Matcher::UrlEncoded("id".into(), "slow".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "slow", "status": "Pending"}"#)
        .expect_at_least(1)
        .create_async()
        .await;

    let cancel = Arc::new(AtomicBool::new(false));
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.store(true, Ordering::Relaxed);
    });

    let client = BflClient::new("test-key").with_base_url(server.url());
    let handle = JobHandle {
        id: "slow".to_string(),
        polling_url: format!("{}/v1/get_result?id=slow", server.url()),
        webhook_url: None,
        family: TaskFamily::Generate,
    };
    let options = PollOptions::new(Duration::from_secs(10))
        .with_interval(Duration::from_millis(25))
        .with_cancellation(cancel);

    let started = Instant::now();
    let result = client
        .poll::<GenerateResult, GenerateDetails>(&handle, &options)
        .await;
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(BflError::Cancelled)));
    assert!(elapsed >= Duration::from_millis(100));
    // The flag is observed within one poll interval, not at the deadline
    assert!(elapsed < Duration::from_secs(2));
}

#[tokio::test]
async fn test_poll_family_guard_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let handle = JobHandle {
        id: "ft-9".to_string(),
        polling_url: format!("{}/v1/get_result?id=ft-9", server.url()),
        webhook_url: None,
        family: TaskFamily::Finetune,
    };
    let result = client
        .poll::<GenerateResult, GenerateDetails>(&handle, &fast_options())
        .await;

    assert!(matches!(result, Err(BflError::FamilyMismatch { .. })));
    mock.assert_async().await;
}

// --- Fine-tuning tests ---

#[tokio::test]
async fn test_finetune_submits_archive_and_polls() {
    let mut server = mockito::Server::new_async().await;
    let submit_mock = server
        .mock("POST", "/v1/finetune")
        .match_header("x-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "file_data": "emlwYnl0ZXM=",
            "finetune_comment": "my model",
            "trigger_word": "TOK",
            "iterations": 300,
            "captioning": true,
            "priority": "quality",
            "finetune_type": "full",
            "lora_rank": 32
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"id": "ft-1", "polling_url": "{}/v1/get_result?id=ft-1"}}"#,
            server.url()
        ))
        .create_async()
        .await;
    let poll_mock = server
        .mock("GET", "/v1/get_result")
        .match_query(Matcher::UrlEncoded("id".into(), "ft-1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "ft-1", "status": "Ready", "result": {}}"#)
        .create_async()
        .await;

    let client = BflClient::new("test-key").with_base_url(server.url());
    let task = FluxFinetune {
        finetune_comment: "my model".to_string(),
        ..Default::default()
    }
    .with_training_archive(b"zipbytes");

    let envelope = client.finetune(&task, &fast_options()).await.unwrap();

    assert_eq!(envelope.id, "ft-1");
    assert_eq!(envelope.status, JobStatus::Ready);
    submit_mock.assert_async().await;
    poll_mock.assert_async().await;
}
