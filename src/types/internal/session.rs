/// Identity of the signed-in user for one session.
///
/// The embedding shell owns at most one `Session` at a time: it is created by
/// a successful login, replaced wholesale on the next login, and dropped on
/// logout. Coordinators receive it by reference instead of reading any
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    is_admin: bool,
}

impl Session {
    pub fn new(user_id: String, username: String, is_admin: bool) -> Self {
        Self {
            user_id,
            username,
            is_admin,
        }
    }

    /// Whether this identity may call the privileged admin operations.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
