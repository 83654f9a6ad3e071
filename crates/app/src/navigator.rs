//! Route targets and role-based navigation.

use comandas_core::{OrderId, Role};

/// Screens the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The menu, landing screen for admins and customers.
    Menu,
    /// The cashier's order list.
    OrdersView,
    /// The kitchen's order queue.
    ChefOrderView,
    /// The admin's user list.
    UserView,
    /// The sign-in screen.
    SignIn,
}

impl Route {
    /// The app path of this route.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Menu => "private/menu",
            Self::OrdersView => "private/orders-view",
            Self::ChefOrderView => "private/chef-order-view",
            Self::UserView => "private/user-view",
            Self::SignIn => "auth/sign-in",
        }
    }

    /// Post-sign-in destination for a role code.
    ///
    /// Codes this client does not recognize land on the menu.
    #[must_use]
    pub const fn for_role_code(code: i32) -> Self {
        match Role::from_code(code) {
            Some(Role::Cashier) => Self::OrdersView,
            Some(Role::Cook) => Self::ChefOrderView,
            Some(Role::Admin | Role::Customer) | None => Self::Menu,
        }
    }
}

/// A request to open a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRequest {
    /// Open the order-detail dialog for the given order.
    OrderDetail(OrderId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_navigation_map() {
        assert_eq!(Route::for_role_code(0), Route::Menu);
        assert_eq!(Route::for_role_code(1), Route::OrdersView);
        assert_eq!(Route::for_role_code(2), Route::ChefOrderView);
        assert_eq!(Route::for_role_code(3), Route::Menu);
    }

    #[test]
    fn test_unknown_roles_default_to_menu() {
        assert_eq!(Route::for_role_code(-1), Route::Menu);
        assert_eq!(Route::for_role_code(4), Route::Menu);
        assert_eq!(Route::for_role_code(99), Route::Menu);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::ChefOrderView.as_path(), "private/chef-order-view");
        assert_eq!(Route::SignIn.as_path(), "auth/sign-in");
    }
}
