use crate::domain::model::{DomainAggregate, DomainCount, SortMode};
use std::io::Write;

/// Flattens the aggregate into an ordered sequence of (domain, count)
/// pairs. Both orderings are total, so the result is deterministic.
pub fn sort_domains(aggregate: &DomainAggregate, mode: SortMode) -> Vec<DomainCount> {
    let mut pairs: Vec<DomainCount> = aggregate
        .iter()
        .map(|(domain, count)| DomainCount {
            domain: domain.to_string(),
            count,
        })
        .collect();

    match mode {
        SortMode::Domain => pairs.sort_by(|a, b| a.domain.cmp(&b.domain)),
        SortMode::Count => pairs.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.domain.cmp(&b.domain))
        }),
    }
    pairs
}

/// File report: `domain, count` header, one `{domain}, {count}` line each.
pub fn write_file_report<W: Write>(writer: &mut W, pairs: &[DomainCount]) -> std::io::Result<()> {
    writeln!(writer, "domain, count")?;
    for pair in pairs {
        writeln!(writer, "{}, {}", pair.domain, pair.count)?;
    }
    Ok(())
}

/// Console report: `domain: count` header, one `{domain}: {count}` line each.
pub fn write_console_report<W: Write>(
    writer: &mut W,
    pairs: &[DomainCount],
) -> std::io::Result<()> {
    writeln!(writer, "domain: count")?;
    for pair in pairs {
        writeln!(writer, "{}: {}", pair.domain, pair.count)?;
    }
    Ok(())
}
