mod common;

use std::io::Cursor;

use common::ScriptedCounterSource;
use tokio_util::sync::CancellationToken;
use traffic_watcher::cli::TrafficCommandHandler;
use traffic_watcher::cli::commands::Commands;
use traffic_watcher::config::Settings;
use traffic_watcher::monitor::{DEFAULT_INTERVAL, SamplingLoop, SnapshotReport};

/// Edge cases for counter anomalies and the interactive entry points

#[tokio::test(start_paused = true)]
async fn test_counter_reset_renders_zero_rate() {
    let source = ScriptedCounterSource::new(&[(5000, 5000), (100, 6024)]);
    let mut sampler =
        SamplingLoop::new(source, Vec::new(), DEFAULT_INTERVAL).with_max_samples(Some(1));

    let summary = sampler
        .run_continuous(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(summary.peak.sent_bytes_per_sec, 0.0);
    assert_eq!(summary.peak.recv_bytes_per_sec, 1024.0);

    let (_, out) = sampler.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Sent: 100.00 B (0.00 B/s) | Recv: 5.88 KB (1.00 KB/s)"));
}

#[tokio::test(start_paused = true)]
async fn test_idle_counters_render_zero_rates() {
    let source = ScriptedCounterSource::new(&[(42, 42)]);
    let mut sampler =
        SamplingLoop::new(source, Vec::new(), DEFAULT_INTERVAL).with_max_samples(Some(2));

    sampler
        .run_continuous(&CancellationToken::new())
        .await
        .unwrap();

    let (_, out) = sampler.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out.matches("Sent: 42.00 B (0.00 B/s) | Recv: 42.00 B (0.00 B/s)").count(),
        2
    );
}

#[tokio::test(start_paused = true)]
async fn test_interfaces_vanishing_mid_run_keeps_sampling() {
    // All interfaces gone reads as zero totals, then they come back
    let source = ScriptedCounterSource::new(&[(5000, 5000), (0, 0), (1024, 2048)]);
    let mut sampler =
        SamplingLoop::new(source, Vec::new(), DEFAULT_INTERVAL).with_max_samples(Some(2));

    let summary = sampler
        .run_continuous(&CancellationToken::new())
        .await
        .expect("Zero totals should be absorbed, not fatal");

    assert_eq!(summary.samples, 2);
    assert_eq!(summary.peak.sent_bytes_per_sec, 1024.0);
    assert_eq!(summary.peak.recv_bytes_per_sec, 2048.0);

    let (_, out) = sampler.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Sent: 0.00 B (0.00 B/s) | Recv: 0.00 B (0.00 B/s)"));
    assert_eq!(out.matches("Final totals - Sent: 1.00 KB, Received: 2.00 KB").count(), 1);
}

fn handler(
    readings: &[(u64, u64)],
    settings: Settings,
) -> TrafficCommandHandler<ScriptedCounterSource, Vec<u8>> {
    TrafficCommandHandler::new(
        ScriptedCounterSource::new(readings),
        Vec::new(),
        settings,
        CancellationToken::new(),
    )
}

#[tokio::test]
async fn test_menu_exit_says_goodbye() {
    let out = handler(&[], Settings::default())
        .handle(None, &mut Cursor::new("3\n"))
        .await
        .unwrap();

    assert!(String::from_utf8(out).unwrap().ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn test_menu_invalid_choice_is_not_an_error() {
    for input in ["9\n", "monitor\n", ""] {
        let out = handler(&[], Settings::default())
            .handle(None, &mut Cursor::new(input))
            .await
            .expect("Invalid input should degrade gracefully");

        assert!(String::from_utf8(out).unwrap().ends_with("Invalid choice!\n"));
    }
}

#[tokio::test]
async fn test_menu_snapshot() {
    let out = handler(&[(500, 1500)], Settings::default())
        .handle(None, &mut Cursor::new("2\n"))
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Current Network Stats:\n  Bytes Sent: 500.00 B\n"));
    assert!(out.contains("  Total: 1.95 KB\n"));
}

#[tokio::test(start_paused = true)]
async fn test_menu_monitor_runs_until_limit() {
    let settings = Settings {
        max_samples: Some(2),
        ..Settings::default()
    };
    let out = handler(&[(0, 0), (1024, 1024), (2048, 2048)], settings)
        .handle(None, &mut Cursor::new("1\n"))
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Press Ctrl+C to stop"));
    assert_eq!(out.matches("Final totals - Sent: 2.00 KB, Received: 2.00 KB").count(), 1);
}

#[tokio::test]
async fn test_snapshot_subcommand_json() {
    let out = handler(&[(500, 1500)], Settings::default())
        .handle(Some(Commands::Snapshot { json: true }), &mut Cursor::new(""))
        .await
        .unwrap();

    let report: SnapshotReport = serde_json::from_slice(&out).expect("Output should be JSON");
    assert_eq!(report.total_bytes, 2000);
}

#[tokio::test]
async fn test_watch_rejects_zero_interval() {
    let result = handler(&[(0, 0)], Settings::default())
        .handle(
            Some(Commands::Watch {
                interval: Some(0),
                count: Some(1),
            }),
            &mut Cursor::new(""),
        )
        .await;

    assert!(result.is_err());
}
