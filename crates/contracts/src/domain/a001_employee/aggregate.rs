use crate::domain::common::AggregateId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned identifier of an employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for EmployeeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(EmployeeId::new)
            .map_err(|e| format!("Invalid record identifier '{}': {}", s, e))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Employee record as returned by `GET /submission` and `GET /submission/{id}`.
///
/// The password is write-only and never part of a read. Every field falls
/// back to its default when the collaborator leaves it out, and both
/// spellings the collaborator has used for `lastName` and `phoneNumber` are
/// accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: String,
    #[serde(rename = "lastName", alias = "lastname")]
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "phoneNumber", alias = "phonenumber")]
    pub phone_number: String,
    #[serde(rename = "locationBranch")]
    pub location_branch: String,
    pub address: String,
    pub department: String,
    pub designation: String,
    #[serde(rename = "userRole")]
    pub user_role: String,
    #[serde(rename = "accessLevel")]
    pub access_level: String,
    #[serde(rename = "basicSalary", deserialize_with = "null_as_zero")]
    pub basic_salary: f64,
    #[serde(rename = "grossSalary", deserialize_with = "null_as_zero")]
    pub gross_salary: f64,
}

impl Employee {
    /// "First Last", or the username when both names are blank
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `DELETE /submission`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<EmployeeId>,
}

impl DeleteRequest {
    /// Build a request with ids in ascending order
    pub fn new(ids: impl IntoIterator<Item = EmployeeId>) -> Self {
        let mut ids: Vec<EmployeeId> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();
        Self { ids }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_record_with_lowercase_aliases() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "name": "Ada",
            "lastname": "Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "phonenumber": "555-0100",
            "basicSalary": 1000,
            "grossSalary": null
        }))
        .unwrap();

        assert_eq!(employee.id, Some(EmployeeId(7)));
        assert_eq!(employee.last_name, "Lovelace");
        assert_eq!(employee.phone_number, "555-0100");
        assert_eq!(employee.basic_salary, 1000.0);
        assert_eq!(employee.gross_salary, 0.0);
        assert_eq!(employee.department, "");
    }

    #[test]
    fn test_deserialize_record_with_camel_case_keys() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "lastName": "Hopper",
            "phoneNumber": "1",
            "locationBranch": "North",
            "userRole": "admin",
            "accessLevel": "full"
        }))
        .unwrap();

        assert_eq!(employee.last_name, "Hopper");
        assert_eq!(employee.location_branch, "North");
        assert_eq!(employee.user_role, "admin");
        assert_eq!(employee.access_level, "full");
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!(EmployeeId::from_string("42"), Ok(EmployeeId(42)));
        assert_eq!(" 9 ".parse::<EmployeeId>(), Ok(EmployeeId(9)));
        assert!(EmployeeId::from_string("abc").is_err());
        assert_eq!(EmployeeId(5).as_string(), "5");
    }

    #[test]
    fn test_delete_request_body() {
        let request = DeleteRequest::new([EmployeeId(3), EmployeeId(1), EmployeeId(3)]);
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "ids": [1, 3] }));
        assert_eq!(request.len(), 2);
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let employee = Employee {
            username: "ghost".into(),
            ..Default::default()
        };
        assert_eq!(employee.display_name(), "ghost");
    }
}
