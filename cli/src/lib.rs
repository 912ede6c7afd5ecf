//! File and terminal plumbing around the `bloomf` filter: reading identifiers from CSV sources and
//! rendering membership reports.

pub mod ingest;
pub mod report;
