use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

/// Token pair plus the authenticated identity, as returned by
/// `POST /auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserInfo,
}

/// Staff role with its permission grants and discretionary-discount bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Admin override: sees everything, every permission check passes.
    #[serde(default)]
    pub view_all: bool,
    /// Upper bound (absolute) for an admin discount applied by this role.
    #[serde(default)]
    pub max_amount: f64,
    /// Upper bound (percent of offer total) for an admin discount.
    #[serde(default)]
    pub max_percentage: f64,
}

/// The authenticated staff user. Also the row shape of `/crm/users/` when
/// searching agents (`staff=true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    /// User-level grants layered on top of the role's permissions.
    #[serde(default)]
    pub custom_permissions: Vec<String>,
}

impl UserInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn role_name(&self) -> &str {
        self.role.as_ref().map(|r| r.name.as_str()).unwrap_or("")
    }

    /// `view_all` roles see everything regardless of permission grants.
    pub fn can_view_all(&self) -> bool {
        self.role.as_ref().map(|r| r.view_all).unwrap_or(false)
    }

    /// Resolution order: view_all override, then user-level custom
    /// permissions, then the role's permission list.
    pub fn has_permission(&self, permission: &str) -> bool {
        if self.can_view_all() {
            return true;
        }
        if self.custom_permissions.iter().any(|p| p == permission) {
            return true;
        }
        self.role
            .as_ref()
            .map(|r| r.permissions.iter().any(|p| p == permission))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: Option<Role>, custom: Vec<&str>) -> UserInfo {
        UserInfo {
            id: 1,
            first_name: "Asha".into(),
            last_name: "Nair".into(),
            mobile: "9000000001".into(),
            email: None,
            role,
            custom_permissions: custom.into_iter().map(String::from).collect(),
        }
    }

    fn role(name: &str, view_all: bool, permissions: Vec<&str>) -> Role {
        Role {
            id: 1,
            name: name.into(),
            permissions: permissions.into_iter().map(String::from).collect(),
            view_all,
            max_amount: 500.0,
            max_percentage: 10.0,
        }
    }

    #[test]
    fn view_all_overrides_everything() {
        let user = user_with(Some(role("Admin", true, vec![])), vec![]);
        assert!(user.has_permission("bookings"));
        assert!(user.has_permission("anything_at_all"));
    }

    #[test]
    fn custom_permissions_beat_role_list() {
        let user = user_with(Some(role("Verifier", false, vec!["bookings"])), vec!["settings"]);
        assert!(user.has_permission("settings"));
        assert!(user.has_permission("bookings"));
        assert!(!user.has_permission("lab_products"));
    }

    #[test]
    fn no_role_means_no_access() {
        let user = user_with(None, vec![]);
        assert!(!user.has_permission("bookings"));
        assert_eq!(user.role_name(), "");
    }
}
