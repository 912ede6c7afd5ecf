use std::io::{self, Write};

use bloomf::{BloomFilter, Filter, Membership};

/// Formats the report line for one identifier.
pub fn line(id: &str, membership: Membership) -> String {
    match membership {
        Membership::ProbablyPresent => format!("{},Probably in the DB", id),
        Membership::Absent => format!("{},Not in the DB", id),
    }
}

/// Checks every identifier against `filter` and writes one report line per identifier, in order.
pub fn write_report<W, S>(out: &mut W, ids: &[S], filter: &BloomFilter) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for id in ids {
        let id = id.as_ref();
        writeln!(out, "{}", line(id, filter.may_contain(id)))?;
    }
    out.flush()
}
