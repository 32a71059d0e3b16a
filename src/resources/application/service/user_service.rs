use crate::{
    core::{
        domain::{
            error::{PanelError, PanelResult},
            model::user::User,
            value_object::{ExternalId, ResourceId},
        },
        infrastructure::{
            api_client::{ApiClient, STATUS_CREATED, STATUS_NO_CONTENT},
            endpoint::Endpoint,
        },
    },
    resources::application::request::create_user_request::CreateUserRequest,
};
use reqwest::Method;
use tracing::{info, warn};

/// User listing, lookup, creation and deletion.
pub struct UserService<'a> {
    api: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn users(&self) -> PanelResult<Vec<User>> {
        self.api.list(Endpoint::Users, "users").await
    }

    pub async fn user(&self, id: &ResourceId) -> PanelResult<Option<User>> {
        self.api.fetch(Endpoint::User(id), "user").await
    }

    /// Validates `request`, then creates the user. Only `201` is success.
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
        min_password_score: Option<zxcvbn::Score>,
    ) -> PanelResult<User> {
        request.validate(min_password_score)?;

        let response = self
            .api
            .send_json(Method::POST, Endpoint::Users, "user", request)
            .await?;
        if response.status != STATUS_CREATED {
            return Err(self
                .api
                .failure("create user", &request.username, &response));
        }

        let user: User = self.api.codec().decode_item("user", &response.body)?;
        info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Deletes the user with the given external id. Only `204` is success.
    ///
    /// # Errors
    /// `PanelError::NotFound` without any DELETE if the external id does not resolve.
    pub async fn delete_user(&self, external_id: &str) -> PanelResult<()> {
        let external = ResourceId::External(ExternalId::new(external_id)?);
        let user = self.user(&external).await?.ok_or_else(|| {
            warn!(external_id, "delete skipped, user not found");
            PanelError::NotFound {
                resource: "user",
                id: external_id.to_string(),
            }
        })?;

        let internal = ResourceId::internal(user.id);
        self.api
            .action(
                Method::DELETE,
                Endpoint::User(&internal),
                None,
                STATUS_NO_CONTENT,
                "delete user",
                user.id,
            )
            .await?;
        info!(user_id = user.id, external_id, "user deleted");
        Ok(())
    }
}
