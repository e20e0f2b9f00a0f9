//! Record-aligned partitioning of the input bytes.

use crate::utils::constants::EOL;

/// A contiguous byte range of the input, aligned to record boundaries:
/// `start` is the first byte of a record and `end` is one past a line
/// terminator (or the end of the input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn bytes<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.end]
    }
}

/// Split `data` into at most `worker_count` record-aligned partitions.
///
/// Boundaries start at `total / worker_count` strides and are snapped
/// forward to just past the next line terminator, so no partition splits a
/// record and the snap cost is bounded by the line length, not the file
/// size. The final partition absorbs the remainder and tolerates a missing
/// trailing newline. The partitions are gap-free, non-overlapping, and
/// cover the input exactly.
pub fn partition(data: &[u8], worker_count: usize) -> Vec<Partition> {
    if data.is_empty() {
        return Vec::new();
    }
    let worker_count = worker_count.max(1);
    let target = (data.len() / worker_count).max(1);

    let mut partitions = Vec::with_capacity(worker_count);
    let mut start = 0;
    while start < data.len() {
        let end = if partitions.len() + 1 == worker_count {
            data.len()
        } else {
            let candidate = (start + target).min(data.len());
            match data[candidate..].iter().position(|&b| b == EOL) {
                Some(offset) => candidate + offset + 1,
                None => data.len(),
            }
        };
        partitions.push(Partition { start, end });
        start = end;
    }
    partitions
}
