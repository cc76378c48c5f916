use std::time::Duration;

use folio_export::browser::BoxFuture;
use folio_export::chromium::{BrowserProcess, drain_events, shut_down};
use folio_export::error::ExportError;

/// A browser process whose graceful close can be made to fail, and which
/// only exits once closed successfully or killed.
#[derive(Default)]
struct FakeProcess {
    close_fails: bool,
    ignores_close: bool,
    closed: bool,
    kills: usize,
    waits: usize,
}

impl FakeProcess {
    fn alive(&self) -> bool {
        self.kills == 0 && !(self.closed && !self.ignores_close)
    }
}

impl BrowserProcess for FakeProcess {
    fn request_close(&mut self) -> BoxFuture<'_, Result<(), ExportError>> {
        Box::pin(async move {
            if self.close_fails {
                return Err(ExportError::BrowserClose("connection gone".to_string()));
            }
            self.closed = true;
            Ok(())
        })
    }

    fn kill(&mut self) -> BoxFuture<'_, Result<(), ExportError>> {
        Box::pin(async move {
            self.kills += 1;
            Ok(())
        })
    }

    fn wait_exit(&mut self) -> BoxFuture<'_, Result<(), ExportError>> {
        Box::pin(async move {
            self.waits += 1;
            if self.alive() {
                std::future::pending::<()>().await;
            }
            Ok(())
        })
    }
}

#[tokio::test]
async fn failed_close_kills_the_live_process() {
    let mut process = FakeProcess {
        close_fails: true,
        ..Default::default()
    };

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        shut_down(&mut process, Duration::from_secs(60)),
    )
    .await
    .expect("shut_down must not wait on a live browser");

    assert!(matches!(result, Err(ExportError::BrowserClose(_))));
    assert_eq!(process.kills, 1);
    assert_eq!(process.waits, 1);
    assert!(!process.alive());
}

#[tokio::test]
async fn graceful_close_does_not_kill() {
    let mut process = FakeProcess::default();

    shut_down(&mut process, Duration::from_secs(5)).await.unwrap();

    assert_eq!(process.kills, 0);
    assert_eq!(process.waits, 1);
}

#[tokio::test]
async fn process_lingering_after_close_is_killed() {
    let mut process = FakeProcess {
        ignores_close: true,
        ..Default::default()
    };

    shut_down(&mut process, Duration::from_millis(20)).await.unwrap();

    assert_eq!(process.kills, 1);
    assert_eq!(process.waits, 2);
    assert!(!process.alive());
}

#[tokio::test]
async fn undecodable_events_do_not_stop_the_handler() {
    let events = futures::stream::iter(vec![
        Ok(()),
        Err("unknown message"),
        Ok(()),
        Err("unknown message"),
        Ok(()),
    ]);

    assert_eq!(drain_events(events).await, 2);
}
