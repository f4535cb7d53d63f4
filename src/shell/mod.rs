// Composition root for the email_signups bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory signup store and wire it into the sign up handler.
// - Expose the HTTP and GraphQL routers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
