// src/api/fetch.rs
use std::sync::mpsc;
use std::thread;

use eframe::egui;

use super::ApiError;

#[derive(Debug)]
struct Reply<T> {
    seq: u64,
    result: Result<T, ApiError>,
}

/// One logical query slot: dispatch runs the job on a worker thread and a
/// later dispatch supersedes any reply still in flight. Every dispatch
/// takes a fresh sequence number; `poll` only ever delivers the reply
/// matching the newest one, so a slow early response can never overwrite
/// a fast later one.
#[derive(Debug)]
pub struct Query<T> {
    seq: u64,
    in_flight: bool,
    tx: mpsc::Sender<Reply<T>>,
    rx: mpsc::Receiver<Reply<T>>,
}

impl<T: Send + 'static> Query<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            seq: 0,
            in_flight: false,
            tx,
            rx,
        }
    }

    /// Run `job` off the UI thread and wake the UI when it finishes.
    /// In-flight work for this slot is not cancelled, just outvoted.
    pub fn dispatch(
        &mut self,
        ctx: &egui::Context,
        job: impl FnOnce() -> Result<T, ApiError> + Send + 'static,
    ) {
        self.seq += 1;
        self.in_flight = true;
        let seq = self.seq;
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = job();
            if tx.send(Reply { seq, result }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    /// Deliver the newest reply if it has arrived. Superseded replies are
    /// drained and dropped without being delivered.
    pub fn poll(&mut self) -> Option<Result<T, ApiError>> {
        while let Ok(reply) = self.rx.try_recv() {
            if reply.seq == self.seq {
                self.in_flight = false;
                return Some(reply.result);
            }
        }
        None
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

impl<T: Send + 'static> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn poll_is_empty_before_any_dispatch() {
        let mut query: Query<u32> = Query::new();
        assert!(query.poll().is_none());
        assert!(!query.in_flight());
    }

    #[test]
    fn stale_replies_are_discarded() {
        let mut query: Query<u32> = Query::new();
        query.seq = 2;
        query.in_flight = true;

        // A slow reply from dispatch 1 lands after dispatch 2's reply was
        // already queued behind it.
        query.tx.send(Reply { seq: 1, result: Ok(10) }).unwrap();
        query.tx.send(Reply { seq: 2, result: Ok(20) }).unwrap();

        assert_eq!(query.poll().unwrap().unwrap(), 20);
        assert!(!query.in_flight());
        assert!(query.poll().is_none());
    }

    #[test]
    fn stale_reply_alone_is_not_delivered() {
        let mut query: Query<u32> = Query::new();
        query.seq = 5;
        query.in_flight = true;

        query.tx.send(Reply { seq: 4, result: Ok(99) }).unwrap();

        assert!(query.poll().is_none());
        assert!(query.in_flight());
    }

    #[test]
    fn dispatch_delivers_result() {
        let ctx = egui::Context::default();
        let mut query: Query<&'static str> = Query::new();
        query.dispatch(&ctx, || Ok("done"));
        assert!(query.in_flight());

        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(result) = query.poll() {
                assert_eq!(result.unwrap(), "done");
                break;
            }
            assert!(Instant::now() < deadline, "worker reply never arrived");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!query.in_flight());
    }

    #[test]
    fn errors_pass_through_poll() {
        let mut query: Query<u32> = Query::new();
        query.seq = 1;
        query.in_flight = true;
        query
            .tx
            .send(Reply {
                seq: 1,
                result: Err(ApiError::NoResponse("refused".into())),
            })
            .unwrap();

        match query.poll().unwrap() {
            Err(ApiError::NoResponse(_)) => {}
            other => panic!("unexpected poll result: {other:?}"),
        }
    }
}
