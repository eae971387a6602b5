/// GQL query to list the first page of sponsors of a GitHub account.
/// Sponsors can be either users or organizations, so we ask for the login of both.
pub const LIST_SPONSORS: &str = "query ListSponsors($login:String!){user(login: $login){sponsors(first: 30){nodes{... on Organization{login},... on User{login}}}}}";
