use clap::Parser;

#[derive(Parser, Default, Debug)]
#[command(name = "sigsleep", about = "sleep loop that reports signals")]
pub struct Arguments {
    /// Passing anything here makes SIGTERM print a notice instead of
    /// killing the process. The values themselves are ignored.
    pub handle_term: Vec<String>,
}
