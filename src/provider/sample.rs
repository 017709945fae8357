//! Built-in demo roster, used when no file is given.

use tracing::debug;

use crate::model::{MemberRecord, Roster, Semester};

use super::{ProviderError, RosterProvider};

/// Serves a fixed in-memory roster. Useful for trying the interface without
/// a data export at hand.
pub struct SampleProvider;

fn member(id: u64, name: &str, status: &str, attendance: f64, updated: &str) -> MemberRecord {
    MemberRecord {
        member_id: id,
        full_name: name.to_string(),
        status: status.to_string(),
        attendance_record: attendance,
        last_updated: updated.to_string(),
    }
}

impl RosterProvider for SampleProvider {
    fn load(&mut self) -> Result<Roster, ProviderError> {
        let active = Semester {
            semester_id: 3,
            name: "Fall 2025".to_string(),
        };
        let roster = Roster {
            org_id: "demo-org".to_string(),
            semesters: vec![
                Semester {
                    semester_id: 1,
                    name: "Fall 2024".to_string(),
                },
                Semester {
                    semester_id: 2,
                    name: "Spring 2025".to_string(),
                },
                active.clone(),
            ],
            active_semester: Some(active),
            members: vec![
                member(101, "Alice Nguyen", "Active", 0.92, "2025-08-20T14:05:00"),
                member(102, "Bob Park", "General", 0.61, "2025-08-18T09:30:00"),
                member(103, "Carol Diaz", "CarryoverActive", 0.88, "2025-08-21T16:45:00"),
                member(104, "Dave Osei", "Exempt", 0.40, "2025-07-30"),
                member(105, "Erin Walsh", "Alumni", 0.97, "2025-05-12T11:00:00"),
                member(106, "Frank Ito", "Active", 0.75, "2025-08-19T08:15:00"),
                member(107, "Grace Kim", "General", 0.55, "2025-08-01"),
                member(108, "Hana Ali", "Probation", 0.33, "not-a-date"),
                member(109, "Ivan Petrov", "Active", 0.81, "2025-08-22T19:20:00"),
                member(110, "Judy Chen", "Alumni", 0.69, "2024-12-15T10:00:00"),
                member(111, "Karl Meyer", "Exempt", 0.50, "2025-06-03T13:40:00"),
                member(112, "Lena Silva", "General", 0.78, "2025-08-10T17:25:00"),
            ],
        };
        debug!(members = roster.members.len(), "serving sample roster");
        Ok(roster)
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}
