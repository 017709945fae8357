//! Roster data model.
//!
//! Records arrive from the external data source as a full-set swap and are
//! never mutated by the view layer. Serde field names follow the upstream
//! export's PascalCase keys so a roster JSON round-trips unchanged.

use serde::{Deserialize, Serialize};

/// One club member, rendered as a table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(rename = "MemberID")]
    pub member_id: u64,
    #[serde(rename = "FullName")]
    pub full_name: String,
    /// Raw status string. Known values are ranked by the Status comparator;
    /// unknown values are carried through and rank after all known ones.
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "AttendanceRecord")]
    pub attendance_record: f64,
    /// Last-updated timestamp exactly as received. Parsed on demand by the
    /// comparator and for display; kept verbatim otherwise.
    #[serde(rename = "LastUpdated")]
    pub last_updated: String,
}

/// One semester as supplied by the source. Opaque to the view core:
/// forwarded to collaborators, never interpreted beyond display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    #[serde(rename = "SemesterID")]
    pub semester_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Full provider payload: organization context plus the raw record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "OrgID")]
    pub org_id: String,
    #[serde(rename = "Semesters", default)]
    pub semesters: Vec<Semester>,
    #[serde(rename = "ActiveSemester")]
    pub active_semester: Option<Semester>,
    #[serde(rename = "Members", default)]
    pub members: Vec<MemberRecord>,
}

/// Organization/semester context threaded through the controller and
/// forwarded unchanged to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterContext {
    pub org_id: String,
    pub selected_semester: Option<Semester>,
    pub active_semester: Option<Semester>,
}

impl RosterContext {
    /// Builds the context from a roster payload. `semester_name` selects a
    /// semester by name; when absent (or not found) the roster's active
    /// semester is used.
    pub fn from_roster(roster: &Roster, semester_name: Option<&str>) -> Self {
        let selected = semester_name
            .and_then(|name| roster.semesters.iter().find(|s| s.name == name))
            .cloned()
            .or_else(|| roster.active_semester.clone());

        Self {
            org_id: roster.org_id.clone(),
            selected_semester: selected,
            active_semester: roster.active_semester.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster {
            org_id: "org-42".to_string(),
            semesters: vec![
                Semester {
                    semester_id: 1,
                    name: "Fall 2025".to_string(),
                },
                Semester {
                    semester_id: 2,
                    name: "Spring 2026".to_string(),
                },
            ],
            active_semester: Some(Semester {
                semester_id: 2,
                name: "Spring 2026".to_string(),
            }),
            members: vec![],
        }
    }

    #[test]
    fn test_context_defaults_to_active_semester() {
        let ctx = RosterContext::from_roster(&roster(), None);
        assert_eq!(ctx.org_id, "org-42");
        assert_eq!(ctx.selected_semester.unwrap().semester_id, 2);
        assert_eq!(ctx.active_semester.unwrap().semester_id, 2);
    }

    #[test]
    fn test_context_selects_semester_by_name() {
        let ctx = RosterContext::from_roster(&roster(), Some("Fall 2025"));
        assert_eq!(ctx.selected_semester.unwrap().semester_id, 1);
        // Active semester is unaffected by the selection.
        assert_eq!(ctx.active_semester.unwrap().semester_id, 2);
    }

    #[test]
    fn test_context_unknown_name_falls_back_to_active() {
        let ctx = RosterContext::from_roster(&roster(), Some("Summer 1999"));
        assert_eq!(ctx.selected_semester.unwrap().semester_id, 2);
    }

    #[test]
    fn test_member_record_round_trips_pascal_case() {
        let json = r#"{
            "MemberID": 7,
            "FullName": "Alice",
            "Status": "Alumni",
            "AttendanceRecord": 0.75,
            "LastUpdated": "2024-01-01"
        }"#;
        let record: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.member_id, 7);
        assert_eq!(record.full_name, "Alice");
        assert_eq!(record.status, "Alumni");

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"MemberID\":7"));
        assert!(out.contains("\"LastUpdated\":\"2024-01-01\""));
    }
}
