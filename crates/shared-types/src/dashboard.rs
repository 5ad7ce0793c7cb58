use crate::auth::{Identity, Role};

/// Which dashboard the `/dashboard` route renders.
///
/// Starts as `Loading` and moves exactly once to one of the four terminal
/// variants. A failed role resolution never reaches a terminal variant: the
/// view navigates away instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Loading,
    Student,
    Teacher,
    Admin,
    Unauthorized,
}

impl DashboardView {
    pub fn for_role(role: &Role) -> Self {
        match role {
            Role::Student => DashboardView::Student,
            Role::Teacher => DashboardView::Teacher,
            Role::Admin => DashboardView::Admin,
            Role::Unrecognized(_) => DashboardView::Unauthorized,
        }
    }

    pub fn for_identity(identity: &Identity) -> Self {
        Self::for_role(&identity.role)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DashboardView::Loading)
    }
}
