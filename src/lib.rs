pub mod runner {
    pub mod arguments;
    pub mod countdown;
    pub mod sighandle;

    pub use arguments::Arguments;
    pub use countdown::Countdown;
    pub use sighandle::handle_signals;
}
