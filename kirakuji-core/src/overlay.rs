//! Timing policy for the curtain overlay shown between draw and result.

use std::future::Future;
use std::pin::pin;

/// Minimum time the overlay stays on screen, in milliseconds.
pub const TRANSITION_MS: u32 = 1600;

/// Extra time allowed for `animationend` past [`TRANSITION_MS`] before the
/// overlay stops waiting for it.
pub const ANIMATION_GRACE_MS: u32 = 400;

/// Complete when `signal` fires or `deadline` passes, whichever comes first.
///
/// Keeps the reveal moving when the stylesheet never plays the animation and
/// `animationend` is not delivered.
pub async fn signal_or_deadline<S, D>(signal: S, deadline: D)
where
    S: Future,
    D: Future,
{
    let signal = pin!(signal);
    let deadline = pin!(deadline);
    let _ = futures::future::select(signal, deadline).await;
}

/// Wait until both futures have completed.
pub async fn wait_for_both<A, B>(a: A, b: B) -> (A::Output, B::Output)
where
    A: Future,
    B: Future,
{
    futures::join!(a, b)
}

/// Run `work` while the overlay plays, and only yield its output once the
/// minimum-duration `timer` and the `animation` end signal have both fired.
pub async fn reveal_after<W, T, E>(work: W, timer: T, animation: E) -> W::Output
where
    W: Future,
    T: Future,
    E: Future,
{
    let (output, _) = futures::join!(work, wait_for_both(timer, animation));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::ready;

    #[test]
    fn both_ready_resolves_immediately() {
        let out = block_on(wait_for_both(ready(1), ready("a")));
        assert_eq!(out, (1, "a"));
    }

    #[test]
    fn reveal_waits_for_animation_end() {
        let (tx, rx) = oneshot::channel::<()>();
        let mut reveal = Box::pin(reveal_after(ready("大吉"), ready(()), rx));
        assert_eq!(reveal.as_mut().now_or_never(), None);

        tx.send(()).unwrap();
        assert_eq!(block_on(reveal), "大吉");
    }

    #[test]
    fn missing_animation_end_falls_back_to_deadline() {
        let (_tx, rx) = oneshot::channel::<()>();
        let (deadline_tx, deadline_rx) = oneshot::channel::<()>();
        let animation = signal_or_deadline(rx, deadline_rx);
        let mut reveal = Box::pin(reveal_after(ready("末吉"), ready(()), animation));
        assert!(reveal.as_mut().now_or_never().is_none());

        deadline_tx.send(()).unwrap();
        assert_eq!(block_on(reveal), "末吉");
    }

    #[test]
    fn animation_end_wins_over_a_pending_deadline() {
        let mut wait = Box::pin(signal_or_deadline(ready(()), futures::future::pending::<()>()));
        assert!(wait.as_mut().now_or_never().is_some());
    }

    #[test]
    fn reveal_waits_for_timer() {
        let (tx, rx) = oneshot::channel::<()>();
        let mut reveal = Box::pin(reveal_after(ready(7), rx, ready(())));
        assert!(reveal.as_mut().now_or_never().is_none());
        tx.send(()).unwrap();
        assert_eq!(block_on(reveal), 7);
    }
}
