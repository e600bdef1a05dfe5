use crate::config::PageConfig;
use crate::errors::{ApiResult, ClientError};
use crate::models::{ApiReply, FormFields, Goal, GoalId, GoalListBody, GoalUpdate};
use async_trait::async_trait;
use reqwest::{multipart, Client, Response, Url};
use tracing::debug;

#[async_trait]
pub trait GoalApi: Send + Sync {
    /// `GET {goals}/{id}`.
    async fn fetch_goal(&self, goal_id: &GoalId) -> ApiResult<Goal>;

    /// `GET {list}`.
    async fn list_goals(&self) -> ApiResult<Vec<Goal>>;

    /// `PUT {goals}/{id}`. The reply is parsed whatever the status code is,
    /// since the server reports failures as `{"error": ...}` bodies.
    async fn update_goal(&self, goal_id: &GoalId, update: &GoalUpdate) -> ApiResult<ApiReply>;

    /// `DELETE {goals}/{id}`. Success is signalled by status alone.
    async fn delete_goal(&self, goal_id: &GoalId) -> ApiResult<()>;

    /// `POST {action}` with the form as multipart. Success is signalled by status alone.
    async fn create_goal(&self, action: &str, fields: &FormFields) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct HttpGoalApi {
    client: Client,
    base_url: Url,
    goals_path: String,
    list_path: String,
}

impl HttpGoalApi {
    pub fn new(config: &PageConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &PageConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            goals_path: config.goals_path.clone(),
            list_path: config.list_path.clone(),
        }
    }

    fn resolve(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Url(format!("{path}: {err}")))
    }

    fn goal_url(&self, goal_id: &GoalId) -> ApiResult<Url> {
        let mut url = self.resolve(&self.goals_path)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(format!("{} cannot hold a goal id", self.goals_path)))?
            .pop_if_empty()
            .push(goal_id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl GoalApi for HttpGoalApi {
    async fn fetch_goal(&self, goal_id: &GoalId) -> ApiResult<Goal> {
        let url = self.goal_url(goal_id)?;
        debug!(%url, "fetching goal");
        let response = ensure_success(self.client.get(url).send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list_goals(&self) -> ApiResult<Vec<Goal>> {
        let url = self.resolve(&self.list_path)?;
        debug!(%url, "listing goals");
        let response = ensure_success(self.client.get(url).send().await?).await?;
        let body = response.text().await?;
        let list: GoalListBody = serde_json::from_str(&body)?;
        Ok(list.into_goals())
    }

    async fn update_goal(&self, goal_id: &GoalId, update: &GoalUpdate) -> ApiResult<ApiReply> {
        let url = self.goal_url(goal_id)?;
        debug!(%url, ?update, "updating goal");
        let response = self.client.put(url).json(update).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "update response");
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_goal(&self, goal_id: &GoalId) -> ApiResult<()> {
        let url = self.goal_url(goal_id)?;
        debug!(%url, "deleting goal");
        ensure_success(self.client.delete(url).send().await?).await?;
        Ok(())
    }

    async fn create_goal(&self, action: &str, fields: &FormFields) -> ApiResult<()> {
        let url = self.resolve(action)?;
        let form = fields.iter().fold(multipart::Form::new(), |form, (name, value)| {
            form.text(name.to_string(), value.to_string())
        });
        debug!(%url, fields = fields.len(), "submitting goal form");
        ensure_success(self.client.post(url).multipart(form).send().await?).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into [`ClientError::Status`], keeping any
/// `{"error": ...}` text from the body.
async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ApiReply>(&body).ok())
        .and_then(|reply| reply.error);
    Err(ClientError::status(status.as_u16(), error))
}
