pub mod profile_query;
pub use profile_query::{ProfileQuery, ProfileQueryError};
