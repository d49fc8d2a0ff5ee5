//! REST types matching the Strata backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, as issued by the backend at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Owner,
    Tenant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Owner => "Owner",
            Role::Tenant => "Tenant",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "Admin" => Some(Role::Admin),
            "Owner" => Some(Role::Owner),
            "Tenant" => Some(Role::Tenant),
            _ => None,
        }
    }

    /// Landing page after a successful login
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Owner => "/owner",
            Role::Tenant => "/tenant",
        }
    }

    /// Single capability-resolution point; forms and tables consume the
    /// resulting flags without re-deriving anything from the role.
    pub fn permissions(&self) -> Permissions {
        match self {
            Role::Admin => Permissions {
                can_edit_building: true,
                can_edit_status: true,
            },
            Role::Owner | Role::Tenant => Permissions {
                can_edit_building: false,
                can_edit_status: false,
            },
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a role may edit on maintenance screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub can_edit_building: bool,
    pub can_edit_status: bool,
}

/// Maintenance request lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    pub const ALL: [MaintenanceStatus; 3] = [
        MaintenanceStatus::Pending,
        MaintenanceStatus::InProgress,
        MaintenanceStatus::Completed,
    ];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Pending => "Pending",
            MaintenanceStatus::InProgress => "InProgress",
            MaintenanceStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<MaintenanceStatus> {
        match s {
            "Pending" => Some(MaintenanceStatus::Pending),
            "InProgress" => Some(MaintenanceStatus::InProgress),
            "Completed" => Some(MaintenanceStatus::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Pending => "Pending",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
        }
    }

    /// Fixed status-to-color mapping used by the read-only badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            MaintenanceStatus::Pending => "badge-error",
            MaintenanceStatus::InProgress => "badge-warning",
            MaintenanceStatus::Completed => "badge-success",
        }
    }
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Session identity returned by the backend on login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub email: String,
    pub user_id: String,
}

/// Register request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    pub address: String,
    pub number_of_units: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildingPayload {
    pub name: String,
    pub address: String,
    pub number_of_units: u32,
}

/// Denormalized building summary embedded in owner and tenant records
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildingSummary {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub number_of_units: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub assigned_building_id: String,
    pub assigned_building: BuildingSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwnerPayload {
    pub name: String,
    pub contact: String,
    pub assigned_building_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub building_id: String,
    pub assigned_unit: String,
    pub building: BuildingSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TenantPayload {
    pub name: String,
    pub contact: String,
    pub building_id: String,
    pub assigned_unit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub building_id: String,
    #[serde(default)]
    pub unit_number: Option<String>,
    pub last_changed_time: DateTime<Utc>,
    pub building_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaintenancePayload {
    pub title: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub building_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
}

/// Partial update body for inline status changes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusUpdate {
    pub status: MaintenanceStatus,
}

/// Server-side scoping for the per-user maintenance listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestScope {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
}

/// Error response from the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage() {
        for role in [Role::Admin, Role::Owner, Role::Tenant] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Manager"), None);
    }

    #[test]
    fn admin_gets_full_edit_permissions() {
        let perms = Role::Admin.permissions();
        assert!(perms.can_edit_building);
        assert!(perms.can_edit_status);
    }

    #[test]
    fn owner_and_tenant_get_no_edit_permissions() {
        for role in [Role::Owner, Role::Tenant] {
            let perms = role.permissions();
            assert!(!perms.can_edit_building);
            assert!(!perms.can_edit_status);
        }
    }

    #[test]
    fn status_badge_mapping_is_fixed() {
        assert_eq!(MaintenanceStatus::Pending.badge_class(), "badge-error");
        assert_eq!(MaintenanceStatus::InProgress.badge_class(), "badge-warning");
        assert_eq!(MaintenanceStatus::Completed.badge_class(), "badge-success");
    }

    #[test]
    fn status_serializes_to_wire_values() {
        for status in MaintenanceStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(MaintenanceStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn login_response_deserializes_backend_shape() {
        let auth: LoginResponse = serde_json::from_str(
            r#"{"Token":"t","Role":"Admin","Email":"a@x.com","UserId":"1"}"#,
        )
        .unwrap();
        assert_eq!(auth.token, "t");
        assert_eq!(auth.role, Role::Admin);
        assert_eq!(auth.email, "a@x.com");
        assert_eq!(auth.user_id, "1");
    }

    #[test]
    fn building_payload_uses_pascal_case_keys() {
        let payload = BuildingPayload {
            name: "North Tower".to_string(),
            address: "1 Harbour St".to_string(),
            number_of_units: 24,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["Name"], "North Tower");
        assert_eq!(json["Address"], "1 Harbour St");
        assert_eq!(json["NumberOfUnits"], 24);
    }

    #[test]
    fn register_payload_uses_camel_case_keys() {
        let payload = RegisterPayload {
            email: "a@x.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            password: "secret".to_string(),
            role: Role::Owner,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["role"], "Owner");
    }

    #[test]
    fn request_scope_omits_absent_fields() {
        let scope = RequestScope {
            role: Role::Owner,
            building_id: Some("b1".to_string()),
            unit_number: None,
        };
        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(json["Role"], "Owner");
        assert_eq!(json["BuildingId"], "b1");
        assert!(json.get("UnitNumber").is_none());
    }

    #[test]
    fn maintenance_request_deserializes_backend_shape() {
        let request: MaintenanceRequest = serde_json::from_str(
            r#"{
                "Id": "r1",
                "Title": "Broken lift",
                "Description": "Lift stuck on level 3",
                "Status": "InProgress",
                "BuildingId": "b1",
                "UnitNumber": "12",
                "LastChangedTime": "2025-06-01T10:30:00Z",
                "BuildingName": "North Tower"
            }"#,
        )
        .unwrap();
        assert_eq!(request.status, MaintenanceStatus::InProgress);
        assert_eq!(request.unit_number.as_deref(), Some("12"));
        assert_eq!(request.building_name, "North Tower");
    }
}
