//! Publishing a single text post.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use tracing::{debug, info, instrument};

use crate::xrpc::XrpcClient;
use crate::xrpc::endpoints::{CREATE_RECORD, CreateRecordResponse};
use crate::{AccessToken, Error, Result};

/// Collection every post is written to.
pub const POST_COLLECTION: &str = "app.bsky.feed.post";

/// A text post record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub text: String,
    #[serde(serialize_with = "rfc3339_millis")]
    pub created_at: DateTime<Utc>,
}

impl PostRecord {
    /// A record stamped with the current wall-clock time.
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Request body for createRecord.
#[derive(Debug, Serialize)]
pub struct PostEnvelope<'a> {
    pub repo: &'a str,
    pub collection: &'static str,
    pub record: &'a PostRecord,
}

impl<'a> PostEnvelope<'a> {
    pub fn new(repo: &'a str, record: &'a PostRecord) -> Self {
        Self {
            repo,
            collection: POST_COLLECTION,
            record,
        }
    }
}

/// The created post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResult {
    /// AT URI of the new record.
    pub uri: String,
    /// Content identifier of the new record.
    pub cid: String,
}

impl From<CreateRecordResponse> for PostResult {
    fn from(response: CreateRecordResponse) -> Self {
        Self {
            uri: response.uri,
            cid: response.cid,
        }
    }
}

/// Writes posts into one repo using an already obtained token.
#[derive(Debug, Clone)]
pub struct Poster {
    client: XrpcClient,
    repo: String,
}

impl Poster {
    /// `repo` is the account identifier the token was issued for.
    pub fn new(client: XrpcClient, repo: impl Into<String>) -> Self {
        Self {
            client,
            repo: repo.into(),
        }
    }

    /// Publish `text` as a new post.
    ///
    /// Text is not validated locally; length limits are enforced by the server.
    /// The access JWT is sent as-is, even when empty.
    #[instrument(skip(self, token, text), fields(repo = %self.repo, len = text.len()))]
    pub async fn post(&self, token: &AccessToken, text: &str) -> Result<PostResult> {
        let record = PostRecord::now(text);
        let envelope = PostEnvelope::new(&self.repo, &record);
        debug!(created_at = %record.created_at, "Creating post");

        let response: CreateRecordResponse = self
            .client
            .procedure_authed(CREATE_RECORD, &envelope, token.access_jwt())
            .await
            .map_err(|e| e.into_error(Error::Post))?;

        info!(uri = %response.uri, "Post created");
        Ok(response.into())
    }
}

fn rfc3339_millis<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
