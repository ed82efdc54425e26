pub mod csv_user_row;
pub mod graphql;
pub mod group_record;
pub mod user_creation_outcome;
pub mod user_creation_request;
pub mod user_record;

pub use csv_user_row::{CsvUserRow, REQUIRED_COLUMNS};
pub use graphql::{CreateUserPayload, CreatedUser, GraphQlErrorEntry, GraphQlResponse, ResponseResult};
pub use group_record::GroupRecord;
pub use user_creation_outcome::{OutcomeStatus, UserCreationOutcome};
pub use user_creation_request::UserCreationRequest;
pub use user_record::UserRecord;
