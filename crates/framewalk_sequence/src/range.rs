//! Closed frame ranges and playback arithmetic
//!
//! `Range` is the numeric half of a sequence descriptor. The offset and
//! interpolation helpers exist for playback and retiming consumers; the
//! parser itself only ever builds ranges from sorted distinct frame sets.

use crate::error::{Result, SequenceError};
use crate::FrameNumber;
use serde::{Deserialize, Serialize};

/// A closed interval `[first, last]` of frame numbers.
///
/// Invariant: `first <= last`. [`Range::new`] rejects violations; code
/// constructing ranges directly must uphold the invariant itself.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub first: FrameNumber,
    pub last: FrameNumber,
}

/// Outcome of moving a frame within a range.
///
/// `bounded` reports that the move ran into the range boundary: the
/// frame was clamped to an end, or the offset wrapped around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameMove {
    pub frame: FrameNumber,
    pub bounded: bool,
}

impl Range {
    /// Create a range, rejecting `first > last`.
    pub fn new(first: FrameNumber, last: FrameNumber) -> Result<Self> {
        if first > last {
            return Err(SequenceError::InvalidRange { first, last });
        }
        Ok(Self { first, last })
    }

    /// The one-frame range `[frame, frame]`.
    pub fn single(frame: FrameNumber) -> Self {
        Self {
            first: frame,
            last: frame,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.first <= self.last
    }

    pub fn contains(&self, frame: FrameNumber) -> bool {
        self.first <= frame && frame <= self.last
    }

    /// Number of frames in the range, `last - first + 1`.
    pub fn duration(&self) -> FrameNumber {
        debug_assert!(self.is_valid());
        debug_assert!(self.last - self.first != FrameNumber::MAX);
        self.last - self.first + 1
    }

    /// Clamp `frame` into the range.
    pub fn clamp_frame(&self, frame: FrameNumber) -> FrameNumber {
        debug_assert!(self.is_valid());
        frame.clamp(self.first, self.last)
    }

    /// Move `current` by `offset`, stopping at the range boundary.
    pub fn offset_clamp_frame(&self, current: FrameNumber, offset: i64) -> FrameMove {
        self.offset_frame(current, offset, false)
    }

    /// Move `current` by `offset`, wrapping around the range.
    pub fn offset_loop_frame(&self, current: FrameNumber, offset: i64) -> FrameMove {
        self.offset_frame(current, offset, true)
    }

    fn offset_frame(&self, current: FrameNumber, offset: i64, cycling: bool) -> FrameMove {
        debug_assert!(self.is_valid());
        debug_assert!(self.contains(current));

        if offset == 0 {
            return FrameMove {
                frame: current,
                bounded: false,
            };
        }

        let forward = offset > 0;
        let positive = offset.unsigned_abs();
        let distance_to_last = u64::from(self.last - current) + 1;
        let distance_to_first = u64::from(current - self.first) + 1;
        let semi_duration = if forward {
            distance_to_last
        } else {
            distance_to_first
        };

        // Still inside the range.
        if positive < semi_duration {
            let moved = positive as FrameNumber;
            let frame = if forward {
                current + moved
            } else {
                current - moved
            };
            return FrameMove {
                frame,
                bounded: false,
            };
        }

        if cycling {
            let duration = u64::from(self.duration());
            let reduced = positive % duration;
            if reduced == 0 {
                return FrameMove {
                    frame: current,
                    bounded: true,
                };
            }
            let position = u64::from(current - self.first);
            let wrapped = if forward {
                (position + reduced) % duration
            } else {
                (position + duration - reduced) % duration
            };
            FrameMove {
                frame: self.first + wrapped as FrameNumber,
                bounded: true,
            }
        } else {
            FrameMove {
                frame: if forward { self.last } else { self.first },
                bounded: true,
            }
        }
    }
}

/// Map a frame of `record` onto `source`, scaling exactly with integer
/// arithmetic. When `reverse` is set the record range is read backwards.
pub fn interpolate_source(
    rec_frame: FrameNumber,
    source: &Range,
    record: &Range,
    reverse: bool,
) -> FrameNumber {
    debug_assert!(source.is_valid());
    debug_assert!(record.is_valid());
    debug_assert!(record.contains(rec_frame));

    let mut rec_duration = u64::from(record.last - record.first);
    let mut src_duration = u64::from(source.last - source.first);
    if rec_duration > src_duration {
        rec_duration += 1;
        src_duration += 1;
    }

    let rec_offset = if reverse {
        u64::from(record.last - rec_frame)
    } else {
        u64::from(rec_frame - record.first)
    };
    let src_offset = if rec_duration == 0 {
        0
    } else {
        rec_offset * src_duration / rec_duration
    };
    source.first + src_offset as FrameNumber
}
