mod graphql;

pub use graphql::{GraphqlAuthBackend, GraphqlBackendError};
