use super::*;

impl AuthorizationService {
    /// Returns whether the user's role equals `role`.
    #[must_use]
    pub fn has_role(&self, user: Option<&User>, role: &Role) -> bool {
        user.is_some_and(|user| user.role() == role)
    }

    /// Returns whether the user's role is one of `roles`.
    #[must_use]
    pub fn has_any_role(&self, user: Option<&User>, roles: &[Role]) -> bool {
        user.is_some_and(|user| roles.contains(user.role()))
    }
}
