//! Line-oriented input and output
//!
//! The link-file format is one page per line: the first whitespace-separated
//! integer is the page id, the remaining integers are pages linking to it.
//! Any non-integer token aborts the load; no partial graph is ever handed to
//! the computation. Output writers are independent of the in-memory results:
//! a failed write leaves the computed ranks fully usable.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{RankError, Result};
use crate::graph::CsrGraph;
use crate::pagerank::RankResult;
use crate::types::{LinkRecord, PageId};

/// Parse one non-empty line of the link file
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_link_line(line: &str, line_no: usize) -> Result<LinkRecord> {
    let mut ids = line.split_whitespace().map(|token| {
        token
            .parse::<PageId>()
            .map_err(|source| RankError::ParseToken {
                line: line_no,
                token: token.to_string(),
                source,
            })
    });

    let page = ids
        .next()
        .ok_or(RankError::EmptyRecord { line: line_no })??;
    let in_links = ids.collect::<Result<Vec<_>>>()?;
    Ok(LinkRecord::new(page, in_links))
}

/// Read all link records from a file
///
/// Blank lines are skipped; any malformed token fails the whole load.
pub fn read_link_file(path: &Path) -> Result<Vec<LinkRecord>> {
    let file = File::open(path).map_err(RankError::io(path))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(RankError::io(path))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_link_line(&line, idx + 1)?);
    }
    Ok(records)
}

/// Write the perplexity trace, one value per line, in iteration order
pub fn write_perplexity(path: &Path, trace: &[f64]) -> Result<()> {
    let file = File::create(path).map_err(RankError::io(path))?;
    let mut writer = BufWriter::new(file);
    for p in trace {
        writeln!(writer, "{p}").map_err(RankError::io(path))?;
    }
    writer.flush().map_err(RankError::io(path))
}

/// Write final scores as `<pageId> <rank>` lines, ascending by page id
///
/// This artifact is deliberately id-sorted (stable and diffable), distinct
/// from the rank-sorted top-K output.
pub fn write_scores(path: &Path, graph: &CsrGraph, result: &RankResult) -> Result<()> {
    let mut pairs: Vec<(PageId, f64)> = (0..graph.num_nodes as u32)
        .map(|n| (graph.page_id(n), result.score(n)))
        .collect();
    pairs.sort_unstable_by_key(|&(id, _)| id);

    let file = File::create(path).map_err(RankError::io(path))?;
    let mut writer = BufWriter::new(file);
    for (id, score) in pairs {
        writeln!(writer, "{id} {score}").map_err(RankError::io(path))?;
    }
    writer.flush().map_err(RankError::io(path))
}
