//! # Common Centrifugo module types
//!
//! The module contains [`ExpireAt`] type used by proxy replies and server API
//! requests, and the [`Headers`] map attached to every proxy request.

use std::collections::HashMap;
use time::OffsetDateTime;

/// Proxy request headers.
///
/// Header name mapped to the ordered list of its values, exactly as it has
/// been received from the worker transport.
pub type Headers = HashMap<String, Vec<String>>;

/// Moment in time when a connection or a subscription should be considered
/// expired.
///
/// Centrifugo expects Unix time in seconds; date/time values are normalized
/// with [`ExpireAt::timestamp`].
///
/// # Examples
/// ```
/// use centrifugo_worker::core::ExpireAt;
/// use time::OffsetDateTime;
///
/// let moment = OffsetDateTime::from_unix_timestamp(1667892603).unwrap();
///
/// assert_eq!(ExpireAt::from(1667892603).timestamp(), 1667892603);
/// assert_eq!(ExpireAt::from(moment).timestamp(), 1667892603);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpireAt {
    /// Unix time in seconds.
    Timestamp(i64),

    /// Date and time.
    DateTime(OffsetDateTime),
}

impl ExpireAt {
    /// Unix time in seconds.
    pub fn timestamp(&self) -> i64 {
        match self {
            ExpireAt::Timestamp(timestamp) => *timestamp,
            ExpireAt::DateTime(date_time) => date_time.unix_timestamp(),
        }
    }
}

impl From<i64> for ExpireAt {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<OffsetDateTime> for ExpireAt {
    fn from(value: OffsetDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<ExpireAt> for i64 {
    fn from(value: ExpireAt) -> Self {
        value.timestamp()
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;
    use time::macros::datetime;

    #[test_case(ExpireAt::from(1667892603) ; "unix timestamp")]
    #[test_case(ExpireAt::from(datetime!(2022-11-08 07:30:03 UTC)) ; "date time in UTC")]
    #[test_case(ExpireAt::from(datetime!(2022-11-08 09:30:03 +2)) ; "date time with offset")]
    fn normalize_to_unix_timestamp(expire_at: ExpireAt) {
        assert_eq!(expire_at.timestamp(), 1667892603);
    }

    #[test]
    fn convert_into_seconds() {
        let seconds: i64 = ExpireAt::from(1111).into();

        assert_eq!(seconds, 1111);
    }
}
