//! Cell timestamp units shared by the legacy client and the backend protocol.
//!
//! The legacy client stamps cells in milliseconds while the backend stores
//! microseconds. Conversion happens in exactly one place, [`TimestampMicros::from_millis`].

use std::fmt;

/// Number of microseconds in one millisecond.
pub const MICROS_PER_MILLI: i64 = 1_000;

/// Cell timestamp in backend units (microseconds since the epoch).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimestampMicros(i64);

impl TimestampMicros {
    /// Sentinel telling the backend to assign the timestamp at apply time.
    pub const UNSET: Self = Self(0);

    /// Construct a timestamp from a raw microsecond value.
    #[inline]
    pub const fn new(micros: i64) -> Self {
        Self(micros)
    }

    /// Convert a legacy millisecond timestamp.
    ///
    /// Returns the converted value and whether it had to saturate at the
    /// `i64` bounds.
    #[inline]
    pub const fn from_millis(millis: i64) -> (Self, bool) {
        match millis.checked_mul(MICROS_PER_MILLI) {
            Some(micros) => (Self(micros), false),
            None => (Self(millis.saturating_mul(MICROS_PER_MILLI)), true),
        }
    }

    /// Resolve an optional legacy timestamp, mapping `None` to [`Self::UNSET`].
    #[inline]
    pub const fn resolve(millis: Option<i64>) -> (Self, bool) {
        match millis {
            Some(millis) => Self::from_millis(millis),
            None => (Self::UNSET, false),
        }
    }

    /// Returns the raw microsecond value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this is the server-assigned sentinel.
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == Self::UNSET.0
    }

    /// Add `delta` microseconds, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, delta: i64) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(micros) => Some(Self(micros)),
            None => None,
        }
    }
}

impl From<TimestampMicros> for i64 {
    fn from(ts: TimestampMicros) -> Self {
        ts.0
    }
}

impl fmt::Debug for TimestampMicros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimestampMicros").field(&self.0).finish()
    }
}
