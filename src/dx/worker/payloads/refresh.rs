//! Reply to the client connection refresh.

use super::expire_at_seconds;
use crate::{
    core::{CentrifugoError, ExpireAt},
    proto::proxy,
    providers::serialization_serde::serialize_json_field,
};
use serde_json::Value;

/// Connection refresh decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshResponse {
    /// Whether connection should be considered expired.
    pub expired: bool,

    /// When connection should be refreshed next time.
    pub expire_at: Option<ExpireAt>,

    /// Updated connection info.
    pub info: Value,
}

impl TryFrom<RefreshResponse> for proxy::RefreshResult {
    type Error = CentrifugoError;

    fn try_from(value: RefreshResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            expired: value.expired,
            expire_at: expire_at_seconds(value.expire_at),
            info: serialize_json_field(&value.info)?,
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;

    #[test_case(ExpireAt::from(1667892603) ; "unix timestamp")]
    #[test_case(ExpireAt::from(datetime!(2022-11-08 07:30:03 UTC)) ; "date time")]
    fn normalize_expire_at(expire_at: ExpireAt) {
        let result = proxy::RefreshResult::try_from(RefreshResponse {
            expire_at: Some(expire_at),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(result.expire_at, 1667892603);
    }

    #[test]
    fn map_expired_connection_without_info() {
        let result = proxy::RefreshResult::try_from(RefreshResponse {
            expired: true,
            info: json!({}),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            result,
            proxy::RefreshResult {
                expired: true,
                ..Default::default()
            }
        );
    }
}
