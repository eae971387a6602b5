use serde_json::json;

use crate::error::ListSponsorsError;
use crate::gql_queries::LIST_SPONSORS;
use crate::utils::{graphql_url, Transport};

use super::{Sponsor, SponsorLister, User};

#[derive(Debug, serde::Deserialize)]
struct GraphqlResponse {
    data: Option<ListSponsorsData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, serde::Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ListSponsorsData {
    user: Option<SponsorableUser>,
}

#[derive(Debug, serde::Deserialize)]
struct SponsorableUser {
    sponsors: SponsorConnection,
}

#[derive(Debug, serde::Deserialize)]
struct SponsorConnection {
    nodes: Vec<Option<SponsorNode>>,
}

/// Either an Organization or a User: the query asks both for `login`,
/// so we don't care which one it is.
#[derive(Debug, serde::Deserialize)]
struct SponsorNode {
    #[serde(default)]
    login: Sponsor,
}

/// Lists sponsors with a single GraphQL request
pub struct GqlSponsorClient<T: Transport> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> GqlSponsorClient<T> {
    /// Create a client for the GraphQL API of the given GitHub host
    pub fn new(transport: T, hostname: &str) -> Self {
        Self::with_endpoint(transport, graphql_url(hostname))
    }

    pub fn with_endpoint(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl<T: Transport> SponsorLister for GqlSponsorClient<T> {
    fn list_sponsors(&self, user: &User) -> Result<Vec<Sponsor>, ListSponsorsError> {
        let body = json!({
            "query": LIST_SPONSORS,
            "variables": { "login": user },
        });

        log::debug!("Listing sponsors of {} via {}", user, self.endpoint);
        let response = self
            .transport
            .post_json(&self.endpoint, &body)
            .map_err(ListSponsorsError::Transport)?;
        log::debug!("GitHub answered {}", response.status);

        if !response.is_ok() {
            return Err(ListSponsorsError::Status {
                status: response.status_text(),
                body: response.body,
            });
        }

        let response: GraphqlResponse =
            serde_json::from_str(&response.body).map_err(ListSponsorsError::Decode)?;

        if !response.errors.is_empty() {
            let messages = response
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ListSponsorsError::Graphql(messages));
        }

        let sponsorable = response
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| ListSponsorsError::UserNotFound(user.clone()))?;

        let sponsors: Vec<Sponsor> = sponsorable
            .sponsors
            .nodes
            .into_iter()
            // One sponsor per node, even when GitHub hands back a hole
            .map(|node| node.map(|n| n.login).unwrap_or_default())
            .collect();
        log::debug!("Found {} sponsors", sponsors.len());

        Ok(sponsors)
    }
}
