use chrono::NaiveDate;

use super::shared_booking::{
    AvailabilityResponse, CourtData, Customer, ReservationRequest, ReservationResponse,
    TimeslotData,
};

/// Price of one court slot in IDR. Display only; the backend sets the charged amount.
pub const COURT_PRICE_IDR: i64 = 50_000;

pub const AVAILABILITY_ERROR: &str = "Failed to load availability data";
pub const INVALID_DATE_ERROR: &str = "Invalid date";
pub const RESERVATION_ERROR: &str = "Failed to create reservation. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReservationStep {
    #[default]
    ScheduleSelection,
    UserDetails,
    Payment,
    Confirmation,
}

impl ReservationStep {
    pub const ALL: [ReservationStep; 4] = [
        ReservationStep::ScheduleSelection,
        ReservationStep::UserDetails,
        ReservationStep::Payment,
        ReservationStep::Confirmation,
    ];

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|step| *step == self)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            ReservationStep::ScheduleSelection => "Select Schedule",
            ReservationStep::UserDetails => "Your Details",
            ReservationStep::Payment => "Payment",
            ReservationStep::Confirmation => "Confirmation",
        }
    }
}

/// The one (court, timeslot) pair currently chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSelection {
    pub court_id: u32,
    pub court_name: String,
    pub timeslot_id: u32,
    pub timeslot_start: String,
}

impl SlotSelection {
    pub fn new(court: &CourtData, timeslot: &TimeslotData) -> Self {
        Self {
            court_id: court.id,
            court_name: court.name.clone(),
            timeslot_id: timeslot.id,
            timeslot_start: timeslot.start_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserDetails {
    /// Presence check only, no format validation.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsField {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AvailabilityState {
    #[default]
    Idle,
    Loading(NaiveDate),
    Loaded(AvailabilityResponse),
    Failed(String),
}

impl AvailabilityState {
    pub fn snapshot(&self) -> Option<&AvailabilityResponse> {
        match self {
            AvailabilityState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AvailabilityState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowAction {
    /// Raw value of the date input; empty clears the date.
    SelectDate(String),
    AvailabilityLoaded {
        requested: NaiveDate,
        snapshot: AvailabilityResponse,
    },
    AvailabilityFailed {
        requested: NaiveDate,
    },
    SelectSlot(SlotSelection),
    EditDetails(DetailsField, String),
    SubmitDetails,
    SubmitPayment,
    ReservationCreated {
        invoice_url: String,
    },
    ReservationFailed,
    Back,
    Restart,
}

impl FlowAction {
    /// Follow-up for a finished availability fetch of `requested`.
    pub fn from_availability<E>(
        requested: NaiveDate,
        result: Result<AvailabilityResponse, E>,
    ) -> Self {
        match result {
            Ok(snapshot) => FlowAction::AvailabilityLoaded {
                requested,
                snapshot,
            },
            Err(_) => FlowAction::AvailabilityFailed { requested },
        }
    }

    /// Follow-up for a finished reservation call. A success without an invoice URL
    /// has nowhere to redirect and is reported as a failure.
    pub fn from_reservation<E>(result: Result<ReservationResponse, E>) -> Self {
        match result {
            Ok(response) if !response.invoice_url.trim().is_empty() => {
                FlowAction::ReservationCreated {
                    invoice_url: response.invoice_url,
                }
            }
            _ => FlowAction::ReservationFailed,
        }
    }
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Effect {
    #[default]
    None,
    FetchAvailability(NaiveDate),
    CreateReservation(ReservationRequest),
    Redirect(String),
    Notify(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationFlow {
    pub step: ReservationStep,
    pub date: Option<NaiveDate>,
    pub selection: Option<SlotSelection>,
    pub details: UserDetails,
    pub availability: AvailabilityState,
    /// A reservation call is in flight.
    pub submitting: bool,
}

impl ReservationFlow {
    pub fn apply(&mut self, action: FlowAction) -> Effect {
        match action {
            FlowAction::SelectDate(value) => self.select_date(&value),
            FlowAction::AvailabilityLoaded { requested, snapshot } => {
                if self.is_loading(requested) {
                    self.availability = AvailabilityState::Loaded(snapshot);
                }
                Effect::None
            }
            FlowAction::AvailabilityFailed { requested } => {
                if self.is_loading(requested) {
                    self.availability = AvailabilityState::Failed(AVAILABILITY_ERROR.to_string());
                }
                Effect::None
            }
            FlowAction::SelectSlot(selection) => {
                if self.step == ReservationStep::ScheduleSelection && self.is_open(&selection) {
                    self.selection = Some(selection);
                    self.step = ReservationStep::UserDetails;
                }
                Effect::None
            }
            FlowAction::EditDetails(field, value) => {
                match field {
                    DetailsField::Name => self.details.name = value,
                    DetailsField::Email => self.details.email = value,
                    DetailsField::Phone => self.details.phone = value,
                }
                Effect::None
            }
            FlowAction::SubmitDetails => {
                if self.step == ReservationStep::UserDetails && self.details.is_complete() {
                    self.step = ReservationStep::Payment;
                }
                Effect::None
            }
            FlowAction::SubmitPayment => {
                if self.step != ReservationStep::Payment || self.submitting {
                    return Effect::None;
                }
                match self.reservation_request() {
                    Some(request) => {
                        self.submitting = true;
                        Effect::CreateReservation(request)
                    }
                    None => Effect::None,
                }
            }
            FlowAction::ReservationCreated { invoice_url } => {
                if !self.submitting {
                    return Effect::None;
                }
                self.submitting = false;
                self.step = ReservationStep::Confirmation;
                Effect::Redirect(invoice_url)
            }
            FlowAction::ReservationFailed => {
                if !self.submitting {
                    return Effect::None;
                }
                self.submitting = false;
                Effect::Notify(RESERVATION_ERROR.to_string())
            }
            FlowAction::Back => {
                if !self.submitting {
                    self.step = ReservationStep::ScheduleSelection;
                }
                Effect::None
            }
            FlowAction::Restart => {
                if !self.submitting {
                    *self = ReservationFlow::default();
                }
                Effect::None
            }
        }
    }

    /// Request for the current selection, or `None` while anything is missing.
    pub fn reservation_request(&self) -> Option<ReservationRequest> {
        let selection = self.selection.as_ref()?;
        let date = self.date?;
        if !self.details.is_complete() {
            return None;
        }

        let (given_names, surname) = split_customer_name(&self.details.name);
        Some(ReservationRequest {
            court_id: selection.court_id,
            timeslot_id: selection.timeslot_id,
            date,
            customer: Customer {
                given_names,
                surname,
                email: self.details.email.clone(),
                mobile_number: self.details.phone.clone(),
            },
        })
    }

    fn select_date(&mut self, value: &str) -> Effect {
        self.selection = None;

        if value.is_empty() {
            self.date = None;
            self.availability = AvailabilityState::Idle;
            return Effect::None;
        }

        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => {
                self.date = Some(date);
                self.availability = AvailabilityState::Loading(date);
                Effect::FetchAvailability(date)
            }
            Err(_) => {
                self.date = None;
                self.availability = AvailabilityState::Failed(INVALID_DATE_ERROR.to_string());
                Effect::None
            }
        }
    }

    fn is_loading(&self, requested: NaiveDate) -> bool {
        matches!(self.availability, AvailabilityState::Loading(date) if date == requested)
    }

    fn is_open(&self, selection: &SlotSelection) -> bool {
        self.availability
            .snapshot()
            .and_then(|snapshot| snapshot.find_open_slot(selection.court_id, selection.timeslot_id))
            .is_some()
    }
}

/// Splits a free-text name at the first space after trimming. The remainder is the
/// surname; a single word gets `-` as surname.
pub fn split_customer_name(name: &str) -> (String, String) {
    let trimmed = name.trim();
    match trimmed.split_once(' ') {
        Some((given, rest)) if !rest.is_empty() => (given.to_string(), rest.to_string()),
        Some((given, _)) => (given.to_string(), "-".to_string()),
        None => (trimmed.to_string(), "-".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::shared_booking::fixtures::snapshot;
    use crate::data::shared_booking::ReservationRecord;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn loaded(d: u32) -> ReservationFlow {
        let mut flow = ReservationFlow::default();
        flow.apply(FlowAction::SelectDate(format!("2025-03-{d:02}")));
        flow.apply(FlowAction::AvailabilityLoaded {
            requested: day(d),
            snapshot: snapshot(day(d)),
        });
        flow
    }

    fn pick(flow: &mut ReservationFlow, court_id: u32, timeslot_id: u32) -> Effect {
        let selection = {
            let data = flow.availability.snapshot().unwrap();
            let (court, slot) = data.find_open_slot(court_id, timeslot_id).unwrap();
            SlotSelection::new(court, slot)
        };
        flow.apply(FlowAction::SelectSlot(selection))
    }

    fn fill_details(flow: &mut ReservationFlow, name: &str) {
        flow.apply(FlowAction::EditDetails(DetailsField::Name, name.into()));
        flow.apply(FlowAction::EditDetails(DetailsField::Email, "jane@example.com".into()));
        flow.apply(FlowAction::EditDetails(DetailsField::Phone, "+62 812 3456 7890".into()));
    }

    fn at_payment() -> ReservationFlow {
        let mut flow = loaded(14);
        pick(&mut flow, 2, 3);
        fill_details(&mut flow, "Jane Anne Doe");
        flow.apply(FlowAction::SubmitDetails);
        assert_eq!(flow.step, ReservationStep::Payment);
        flow
    }

    #[test]
    fn selecting_a_date_requests_that_date_once() {
        let mut flow = ReservationFlow::default();
        let effect = flow.apply(FlowAction::SelectDate("2025-03-14".into()));

        assert_eq!(effect, Effect::FetchAvailability(day(14)));
        assert_eq!(flow.date, Some(day(14)));
        assert_eq!(flow.availability, AvailabilityState::Loading(day(14)));
    }

    #[test]
    fn clearing_the_date_issues_no_request_and_drops_data() {
        let mut flow = loaded(14);
        let effect = flow.apply(FlowAction::SelectDate(String::new()));

        assert_eq!(effect, Effect::None);
        assert_eq!(flow.date, None);
        assert_eq!(flow.availability, AvailabilityState::Idle);
    }

    #[test]
    fn unparsable_date_shows_error_without_request() {
        let mut flow = ReservationFlow::default();
        let effect = flow.apply(FlowAction::SelectDate("14/03/2025".into()));

        assert_eq!(effect, Effect::None);
        assert_eq!(flow.availability.error(), Some(INVALID_DATE_ERROR));
    }

    #[test]
    fn failed_fetch_clears_snapshot_and_sets_error() {
        let mut flow = ReservationFlow::default();
        flow.apply(FlowAction::SelectDate("2025-03-14".into()));
        flow.apply(FlowAction::AvailabilityFailed { requested: day(14) });

        assert!(flow.availability.snapshot().is_none());
        assert_eq!(flow.availability.error(), Some(AVAILABILITY_ERROR));

        flow.apply(FlowAction::SelectDate("2025-03-15".into()));
        flow.apply(FlowAction::AvailabilityLoaded {
            requested: day(15),
            snapshot: snapshot(day(15)),
        });
        assert_eq!(flow.availability.error(), None);
        assert!(flow.availability.snapshot().is_some());
    }

    #[test]
    fn stale_availability_is_discarded() {
        let mut flow = ReservationFlow::default();
        flow.apply(FlowAction::SelectDate("2025-03-14".into()));
        flow.apply(FlowAction::SelectDate("2025-03-15".into()));

        flow.apply(FlowAction::AvailabilityLoaded {
            requested: day(14),
            snapshot: snapshot(day(14)),
        });
        assert_eq!(flow.availability, AvailabilityState::Loading(day(15)));

        flow.apply(FlowAction::AvailabilityFailed { requested: day(14) });
        assert_eq!(flow.availability, AvailabilityState::Loading(day(15)));

        flow.apply(FlowAction::AvailabilityLoaded {
            requested: day(15),
            snapshot: snapshot(day(15)),
        });
        assert_eq!(flow.availability.snapshot().map(|s| s.date), Some(day(15)));
    }

    #[test]
    fn late_result_after_clearing_is_ignored() {
        let mut flow = ReservationFlow::default();
        flow.apply(FlowAction::SelectDate("2025-03-14".into()));
        flow.apply(FlowAction::SelectDate(String::new()));
        flow.apply(FlowAction::AvailabilityLoaded {
            requested: day(14),
            snapshot: snapshot(day(14)),
        });

        assert_eq!(flow.availability, AvailabilityState::Idle);
    }

    #[test]
    fn selecting_a_slot_records_pair_and_advances() {
        let mut flow = loaded(14);
        pick(&mut flow, 1, 3);

        assert_eq!(flow.step, ReservationStep::UserDetails);
        let selection = flow.selection.clone().unwrap();
        assert_eq!(selection.court_id, 1);
        assert_eq!(selection.court_name, "Court A");
        assert_eq!(selection.timeslot_id, 3);
        assert_eq!(selection.timeslot_start, "08:00");
    }

    #[test]
    fn new_selection_overwrites_previous() {
        let mut flow = loaded(14);
        pick(&mut flow, 1, 1);
        flow.apply(FlowAction::Back);
        pick(&mut flow, 2, 2);

        let selection = flow.selection.unwrap();
        assert_eq!((selection.court_id, selection.timeslot_id), (2, 2));
    }

    #[test]
    fn booked_or_unknown_slot_is_not_selectable() {
        let mut flow = loaded(14);
        let booked = SlotSelection {
            court_id: 1,
            court_name: "Court A".into(),
            timeslot_id: 2,
            timeslot_start: "07:00".into(),
        };
        flow.apply(FlowAction::SelectSlot(booked));

        assert_eq!(flow.step, ReservationStep::ScheduleSelection);
        assert!(flow.selection.is_none());
    }

    #[test]
    fn date_change_resets_selection() {
        let mut flow = loaded(14);
        pick(&mut flow, 1, 1);
        flow.apply(FlowAction::Back);
        flow.apply(FlowAction::SelectDate("2025-03-20".into()));

        assert!(flow.selection.is_none());
    }

    #[test]
    fn details_gate_opens_only_when_all_fields_present() {
        let mut flow = loaded(14);
        pick(&mut flow, 1, 1);

        flow.apply(FlowAction::SubmitDetails);
        assert_eq!(flow.step, ReservationStep::UserDetails);

        flow.apply(FlowAction::EditDetails(DetailsField::Name, "Jane".into()));
        flow.apply(FlowAction::EditDetails(DetailsField::Email, "jane@example.com".into()));
        flow.apply(FlowAction::SubmitDetails);
        assert_eq!(flow.step, ReservationStep::UserDetails);

        flow.apply(FlowAction::EditDetails(DetailsField::Phone, "0812".into()));
        assert!(flow.details.is_complete());
        flow.apply(FlowAction::SubmitDetails);
        assert_eq!(flow.step, ReservationStep::Payment);
    }

    #[test]
    fn name_splitting() {
        assert_eq!(split_customer_name("Jane Doe"), ("Jane".into(), "Doe".into()));
        assert_eq!(split_customer_name("Jane"), ("Jane".into(), "-".into()));
        assert_eq!(
            split_customer_name("Jane Anne Doe"),
            ("Jane".into(), "Anne Doe".into())
        );
        assert_eq!(split_customer_name("  Jane  "), ("Jane".into(), "-".into()));
    }

    #[test]
    fn payment_builds_request_from_selection_and_details() {
        let mut flow = at_payment();
        let effect = flow.apply(FlowAction::SubmitPayment);

        let Effect::CreateReservation(request) = effect else {
            panic!("expected a reservation request, got {effect:?}");
        };
        assert_eq!(request.court_id, 2);
        assert_eq!(request.timeslot_id, 3);
        assert_eq!(request.date, day(14));
        assert_eq!(request.customer.given_names, "Jane");
        assert_eq!(request.customer.surname, "Anne Doe");
        assert_eq!(request.customer.email, "jane@example.com");
        assert_eq!(request.customer.mobile_number, "+62 812 3456 7890");
        assert!(flow.submitting);
    }

    #[test]
    fn payment_is_not_submitted_twice() {
        let mut flow = at_payment();
        flow.apply(FlowAction::SubmitPayment);

        assert_eq!(flow.apply(FlowAction::SubmitPayment), Effect::None);
        flow.apply(FlowAction::Back);
        assert_eq!(flow.step, ReservationStep::Payment);
    }

    #[test]
    fn success_redirects_to_invoice_url() {
        let mut flow = at_payment();
        flow.apply(FlowAction::SubmitPayment);
        let effect = flow.apply(FlowAction::ReservationCreated {
            invoice_url: "https://checkout.example/inv/123".into(),
        });

        assert_eq!(effect, Effect::Redirect("https://checkout.example/inv/123".into()));
        assert_eq!(flow.step, ReservationStep::Confirmation);
        assert!(!flow.submitting);
    }

    #[test]
    fn failure_notifies_and_keeps_selection() {
        let mut flow = at_payment();
        let before = flow.clone();
        flow.apply(FlowAction::SubmitPayment);
        let effect = flow.apply(FlowAction::ReservationFailed);

        assert_eq!(effect, Effect::Notify(RESERVATION_ERROR.into()));
        assert_eq!(flow, before);

        // the user can retry the same action
        assert!(matches!(
            flow.apply(FlowAction::SubmitPayment),
            Effect::CreateReservation(_)
        ));
    }

    #[test]
    fn back_keeps_choices() {
        let mut flow = at_payment();
        flow.apply(FlowAction::Back);

        assert_eq!(flow.step, ReservationStep::ScheduleSelection);
        assert!(flow.selection.is_some());
        assert_eq!(flow.details.name, "Jane Anne Doe");
    }

    #[test]
    fn restart_clears_everything() {
        let mut flow = at_payment();
        flow.apply(FlowAction::SubmitPayment);
        flow.apply(FlowAction::ReservationCreated {
            invoice_url: "https://checkout.example/inv/1".into(),
        });
        flow.apply(FlowAction::Restart);

        assert_eq!(flow, ReservationFlow::default());
        assert_eq!(flow.step, ReservationStep::ScheduleSelection);
        assert_eq!(flow.date, None);
        assert_eq!(flow.details, UserDetails::default());
    }

    #[test]
    fn step_order_is_fixed() {
        let indexes: Vec<usize> = ReservationStep::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
        assert_eq!(ReservationStep::Payment.label(), "Payment");
    }

    #[test]
    fn slot_selection_is_ignored_off_the_schedule_step() {
        let mut flow = loaded(14);
        pick(&mut flow, 1, 1);
        assert_eq!(flow.step, ReservationStep::UserDetails);

        let other = {
            let data = flow.availability.snapshot().unwrap();
            let (court, slot) = data.find_open_slot(2, 3).unwrap();
            SlotSelection::new(court, slot)
        };
        assert_eq!(flow.apply(FlowAction::SelectSlot(other)), Effect::None);
        assert_eq!(flow.step, ReservationStep::UserDetails);
        assert_eq!(flow.selection.as_ref().map(|s| s.court_id), Some(1));
    }

    #[test]
    fn reservation_results_without_pending_call_are_ignored() {
        let mut flow = at_payment();
        let before = flow.clone();

        let created = flow.apply(FlowAction::ReservationCreated {
            invoice_url: "https://checkout.example/inv/9".into(),
        });
        assert_eq!(created, Effect::None);
        assert_eq!(flow, before);

        assert_eq!(flow.apply(FlowAction::ReservationFailed), Effect::None);
        assert_eq!(flow, before);
    }

    #[test]
    fn availability_results_map_to_tagged_actions() {
        let ok = FlowAction::from_availability::<()>(day(14), Ok(snapshot(day(14))));
        assert!(matches!(ok, FlowAction::AvailabilityLoaded { requested, .. } if requested == day(14)));

        let failed = FlowAction::from_availability(day(15), Err("timeout"));
        assert_eq!(failed, FlowAction::AvailabilityFailed { requested: day(15) });
    }

    #[test]
    fn reservation_results_map_to_follow_up_actions() {
        let response = |url: &str| ReservationResponse {
            invoice_url: url.into(),
            reservation: ReservationRecord::default(),
        };

        assert_eq!(
            FlowAction::from_reservation::<()>(Ok(response("https://checkout.example/inv/5"))),
            FlowAction::ReservationCreated {
                invoice_url: "https://checkout.example/inv/5".into()
            }
        );
        assert_eq!(
            FlowAction::from_reservation::<()>(Ok(response(""))),
            FlowAction::ReservationFailed
        );
        assert_eq!(
            FlowAction::from_reservation(Err("500")),
            FlowAction::ReservationFailed
        );
    }

    #[test]
    fn full_round_trip_through_effects() {
        let mut flow = at_payment();
        let Effect::CreateReservation(_) = flow.apply(FlowAction::SubmitPayment) else {
            panic!("expected a reservation request");
        };

        let follow_up = FlowAction::from_reservation::<()>(Ok(ReservationResponse {
            invoice_url: "https://checkout.example/inv/7".into(),
            reservation: ReservationRecord::default(),
        }));
        assert_eq!(
            flow.apply(follow_up),
            Effect::Redirect("https://checkout.example/inv/7".into())
        );
    }
}
