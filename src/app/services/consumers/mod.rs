//! Streaming record consumers
//!
//! A consumer receives every valid record exactly once during the single
//! pass over the source file, may hold private accumulator state, and is
//! finalised once at end of stream. The pipeline drives all registered
//! consumers synchronously, in registration order, for each record.

pub mod batch_writer;
pub mod category_counter;
pub mod verb_counter;

pub use batch_writer::BatchWriter;
pub use category_counter::CategoryCounter;
pub use verb_counter::VerbCounter;

use crate::app::models::LogRecord;
use crate::Result;

/// A stateful unit of the record fan-out
///
/// `consume` is called once per valid record; `finalise` exactly once at end
/// of stream (after the last `consume`); `report` renders the accumulated
/// result for the end-of-run summary.
pub trait RecordConsumer {
    /// Short name used as the summary heading
    fn name(&self) -> &'static str;

    /// Process one record, updating internal state
    fn consume(&mut self, record: &LogRecord) -> Result<()>;

    /// Flush and release resources at end of stream
    ///
    /// The default is a no-op; consumers that hold file handles override it.
    fn finalise(&mut self) -> Result<()> {
        Ok(())
    }

    /// Render the accumulated result
    fn report(&self) -> String;
}
