/// Clock adapters backing the Sleeper port
mod tokio_sleeper;

pub use tokio_sleeper::TokioSleeper;
