use signal_hook::iterator::Signals;
use std::sync::mpsc::Sender;
use std::thread;

/// Registers the given signals and spawns a thread that prints a notice for
/// each one delivered, then nudges the main loop awake through `wakeup`.
pub fn handle_signals(signals: Vec<i32>, wakeup: Sender<i32>) {
    let mut signals = Signals::new(&signals).expect("Failed to register signals");

    thread::spawn(move || {
        for signal in signals.forever() {
            println!("SLEEP SIG {}", signal);
            // Receiver gone means the loop already finished.
            if wakeup.send(signal).is_err() {
                break;
            }
        }
    });
}
