//! User blocking module.
//!
//! The [`BlockUserRequestBuilder`] prevents user from connecting and the
//! [`UnblockUserRequestBuilder`] lifts the restriction.

use super::{builder_error, validate_not_empty, CentrifugoApiClient};
use crate::{
    core::{CentrifugoError, ExpireAt, Transport},
    proto::api,
};
use derive_builder::Builder;

impl<T> CentrifugoApiClient<T> {
    /// Create a new block user request builder.
    pub fn block_user<U>(&self, user: U) -> BlockUserRequestBuilder<T>
    where
        U: Into<String>,
    {
        BlockUserRequestBuilder {
            api_client: Some(self.clone()),
            user: Some(user.into()),
            ..Default::default()
        }
    }

    /// Create a new unblock user request builder.
    pub fn unblock_user<U>(&self, user: U) -> UnblockUserRequestBuilder<T>
    where
        U: Into<String>,
    {
        UnblockUserRequestBuilder {
            api_client: Some(self.clone()),
            user: Some(user.into()),
        }
    }
}

/// The block user request builder.
///
/// This struct is used by the [`block_user`] method of the
/// [`CentrifugoApiClient`].
///
/// [`block_user`]: crate::dx::api::CentrifugoApiClient::block_user
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct BlockUserRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// User to block.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) user: String,

    /// When block expires. User is blocked forever when not set.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) expire_at: Option<ExpireAt>,
}

impl<T> BlockUserRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("user", self.user.as_ref())
    }
}

impl<T> BlockUserRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<(), CentrifugoError> {
        let request = self.build().map_err(builder_error)?;
        let message = api::BlockUserRequest {
            expire_at: request.expire_at.map(i64::from).unwrap_or_default(),
            user: request.user.clone(),
        };

        request
            .api_client
            .call::<_, api::BlockUserResponse>("BlockUser", message)
            .map(|_| ())
    }
}

/// The unblock user request builder.
///
/// This struct is used by the [`unblock_user`] method of the
/// [`CentrifugoApiClient`].
///
/// [`unblock_user`]: crate::dx::api::CentrifugoApiClient::unblock_user
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct UnblockUserRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// User to unblock.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) user: String,
}

impl<T> UnblockUserRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("user", self.user.as_ref())
    }
}

impl<T> UnblockUserRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<(), CentrifugoError> {
        let request = self.build().map_err(builder_error)?;
        let message = api::UnblockUserRequest {
            user: request.user.clone(),
        };

        request
            .api_client
            .call::<_, api::UnblockUserResponse>("UnblockUser", message)
            .map(|_| ())
    }
}
