use serde::{Deserialize, Serialize};

use crate::domain::models::user::User;

/// Token and profile always travel together: both are written on
/// login/registration and both are cleared on logout.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}
