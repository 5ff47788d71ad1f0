use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtData {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeslotData {
    pub id: u32,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeslotStatus {
    pub timeslot: TimeslotData,
    pub is_booked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtAvailability {
    pub court: CourtData,
    pub timeslots: Vec<TimeslotStatus>,
}

impl CourtAvailability {
    /// Unbooked slots, in the order the backend returned them.
    pub fn open_slots(&self) -> impl Iterator<Item = &TimeslotData> {
        self.timeslots
            .iter()
            .filter(|status| !status.is_booked)
            .map(|status| &status.timeslot)
    }

    pub fn open_slot_count(&self) -> usize {
        self.open_slots().count()
    }
}

/// Snapshot of every court and its slots for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub courts: Vec<CourtAvailability>,
}

impl AvailabilityResponse {
    pub fn find_open_slot(
        &self,
        court_id: u32,
        timeslot_id: u32,
    ) -> Option<(&CourtData, &TimeslotData)> {
        self.courts
            .iter()
            .find(|availability| availability.court.id == court_id)
            .and_then(|availability| {
                availability
                    .open_slots()
                    .find(|slot| slot.id == timeslot_id)
                    .map(|slot| (&availability.court, slot))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub given_names: String,
    pub surname: String,
    pub email: String,
    pub mobile_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub court_id: u32,
    pub timeslot_id: u32,
    pub date: NaiveDate,
    pub customer: Customer,
}

/// Reservation as stored by the backend. Every field is optional so that a 2xx body
/// carrying an `invoice_url` always decodes, whatever shape the record takes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationRecord {
    pub id: Option<u32>,
    pub court_id: Option<u32>,
    pub timeslot_id: Option<u32>,
    pub date: Option<String>,
    pub status: Option<String>,
    pub total_price: Option<f64>,
    pub payment_id: Option<String>,
    pub invoice_url: Option<String>,
    pub payment_status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub court: Option<CourtData>,
    pub timeslot: Option<TimeslotData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub invoice_url: String,
    #[serde(default)]
    pub reservation: ReservationRecord,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn court(id: u32, name: &str) -> CourtData {
        CourtData {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            is_active: true,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    pub fn timeslot(id: u32, start: &str, end: &str) -> TimeslotData {
        TimeslotData {
            id,
            start_time: start.to_string(),
            end_time: end.to_string(),
            is_active: true,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    /// Two courts, three slots each; slot 2 on court 1 is booked.
    pub fn snapshot(date: NaiveDate) -> AvailabilityResponse {
        let slots = |court_id: u32| {
            (1..=3)
                .map(|id| TimeslotStatus {
                    timeslot: timeslot(id, &format!("0{}:00", id + 5), &format!("0{}:00", id + 6)),
                    is_booked: court_id == 1 && id == 2,
                })
                .collect()
        };

        AvailabilityResponse {
            date,
            courts: vec![
                CourtAvailability {
                    court: court(1, "Court A"),
                    timeslots: slots(1),
                },
                CourtAvailability {
                    court: court(2, "Court B"),
                    timeslots: slots(2),
                },
            ],
        }
    }
}
