#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::thread;

use console_logger::{Logger, LoggerConfig, MemorySink, Severity};
use serde_json::json;

#[test]
fn logger_is_shareable_across_threads() {
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(Logger::new(
        LoggerConfig::new()
            .with_source("Worker")
            .with_min_level(Severity::Info)
            .with_timestamp_fn(|| "1-1 0:0:0.0".to_string())
            .with_sink(sink.clone()),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                logger.info("tick", Some(&[json!(i)]));
                logger.debug("filtered", None);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let got = sink.emissions();
    assert_eq!(got.len(), 4);
    assert!(got
        .iter()
        .all(|e| e.line == "1-1 0:0:0.0 [Worker]  [INFO] tick" && e.style.is_empty()));
    let mut ids: Vec<i64> = got.iter().map(|e| e.args[0].as_i64().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn independent_loggers_do_not_share_configuration() {
    let quiet_sink = Arc::new(MemorySink::new());
    let loud_sink = Arc::new(MemorySink::new());
    let quiet = Logger::new(
        LoggerConfig::new()
            .with_min_level(Severity::Error)
            .with_sink(quiet_sink.clone()),
    );
    let loud = Logger::new(
        LoggerConfig::new()
            .with_min_level(Severity::Silly)
            .with_sink(loud_sink.clone()),
    );

    quiet.warn("ignored", None);
    loud.silly("kept", None);

    assert!(quiet_sink.is_empty());
    assert_eq!(loud_sink.len(), 1);
    assert!(loud_sink.emissions()[0].line.ends_with(" [SILLY] kept"));
}
