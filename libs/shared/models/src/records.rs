use serde::{Deserialize, Serialize};

/// A doctor in the directory. Names are the working identifier but are not
/// unique; duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
}

/// A booked appointment. `date` is "mm/dd/yyyy" and `time` is "hh:mm"
/// 24-hour on a 15 minute interval; both are validated on the way in and
/// stored as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub doctor: String,
    pub patient: String,
    pub kind: String,
    pub date: String,
    pub time: String,
}

/// A partial appointment record, matched against stored records by field
/// equality. Doubles as the raw create/delete payload before required-field
/// validation completes it into an [`Appointment`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl AppointmentFilter {
    /// True when every set field equals the appointment's value. An empty
    /// filter matches everything.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        fn field(wanted: &Option<String>, actual: &str) -> bool {
            wanted.as_deref().map_or(true, |value| value == actual)
        }

        field(&self.doctor, &appointment.doctor)
            && field(&self.patient, &appointment.patient)
            && field(&self.kind, &appointment.kind)
            && field(&self.date, &appointment.date)
            && field(&self.time, &appointment.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment() -> Appointment {
        Appointment {
            doctor: "Strange".to_string(),
            patient: "Palmer".to_string(),
            kind: "checkup".to_string(),
            date: "03/14/2025".to_string(),
            time: "09:15".to_string(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(AppointmentFilter::default().matches(&appointment()));
    }

    #[test]
    fn set_fields_must_all_match() {
        let filter = AppointmentFilter {
            doctor: Some("Strange".to_string()),
            time: Some("10:00".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&appointment()));
    }
}
