use clap::Parser;
use sigsleep::runner::{handle_signals, Arguments, Countdown};
use signal_hook::consts::{SIGINT, SIGQUIT, SIGTERM};
use std::sync::mpsc;
use std::time::Duration;

const SLEEP_SECS: f64 = 5.0;

fn main() {
    let args = Arguments::parse();

    let mut signals = vec![SIGINT, SIGQUIT];
    if !args.handle_term.is_empty() {
        signals.push(SIGTERM);
    }

    let (wakeup, woken) = mpsc::channel();
    handle_signals(signals, wakeup);

    let countdown = Countdown::new(SLEEP_SECS);
    let mut tosleep = countdown.remaining();
    while tosleep > 0.0 {
        println!("SLEEP({:?})", tosleep);
        // A signal wakes this early; either way recompute what is left.
        let _ = woken.recv_timeout(Duration::from_secs_f64(tosleep));
        tosleep = countdown.remaining();
    }
    println!("SLEEP DONE");
}
