use chrono::NaiveDate;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::server_fn::error::NoCustomError;

use crate::components::progress::ProgressIndicator;
use crate::components::toast::{use_toasts, Toasts};
use crate::data::flow::{Effect, FlowAction, ReservationFlow, ReservationStep};
use crate::data::shared_booking::{AvailabilityResponse, ReservationRequest, ReservationResponse};
use crate::pages::confirmation::Confirmation;
use crate::pages::details::UserDetailsForm;
use crate::pages::payment::Payment;
use crate::pages::schedule::ScheduleSelection;

#[server(GetAvailability)]
pub async fn get_availability(date: NaiveDate) -> Result<AvailabilityResponse, ServerFnError> {
    use crate::data::backend::ReservationBackend;

    let client = ReservationBackend::client()
        .map_err(|e| ServerFnError::<NoCustomError>::ServerError(e.to_string()))?;

    client.fetch_availability(date).await.map_err(|e| {
        log::error!("availability request for {} failed: {}", date, e);
        ServerFnError::<NoCustomError>::ServerError("Failed to fetch availability".into())
    })
}

#[server(SubmitReservation)]
pub async fn create_reservation(
    request: ReservationRequest,
) -> Result<ReservationResponse, ServerFnError> {
    use crate::data::backend::ReservationBackend;

    let client = ReservationBackend::client()
        .map_err(|e| ServerFnError::<NoCustomError>::ServerError(e.to_string()))?;

    match client.create_reservation(&request).await {
        Ok(response) => {
            log::info!(
                "reservation {:?} created for court {} slot {} on {}",
                response.reservation.id,
                request.court_id,
                request.timeslot_id,
                request.date
            );
            Ok(response)
        }
        Err(e) => {
            log::error!(
                "reservation for court {} slot {} on {} failed: {}",
                request.court_id,
                request.timeslot_id,
                request.date,
                e
            );
            Err(ServerFnError::<NoCustomError>::ServerError(
                "Failed to create reservation".into(),
            ))
        }
    }
}

/// Applies `action` and runs whatever effect the transition asks for.
fn dispatch_action(flow: RwSignal<ReservationFlow>, toasts: Toasts, action: FlowAction) {
    let Some(effect) = flow.try_update(|state| state.apply(action)) else {
        return;
    };

    match effect {
        Effect::None => {}
        Effect::FetchAvailability(date) => {
            leptos::task::spawn_local(async move {
                let result = get_availability(date)
                    .await
                    .inspect_err(|err| error!("Failed to fetch availability: {:?}", err));
                dispatch_action(flow, toasts, FlowAction::from_availability(date, result));
            });
        }
        Effect::CreateReservation(request) => {
            leptos::task::spawn_local(async move {
                let result = create_reservation(request)
                    .await
                    .inspect_err(|err| error!("Failed to create reservation: {:?}", err));
                dispatch_action(flow, toasts, FlowAction::from_reservation(result));
            });
        }
        Effect::Redirect(url) => redirect_to(&url),
        Effect::Notify(message) => toasts.push(message),
    }
}

fn redirect_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        error!("Redirect to invoice failed: {:?}", err);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let flow = RwSignal::new(ReservationFlow::default());
    let toasts = use_toasts();

    let step = Memo::new(move |_| flow.with(|state| state.step));
    let dispatch = Callback::new(move |action: FlowAction| dispatch_action(flow, toasts, action));

    let container = move || match step.get() {
        ReservationStep::ScheduleSelection => "w-full max-w-6xl mx-auto",
        _ => "w-full max-w-2xl mx-auto",
    };

    view! {
        <div class="min-h-[calc(100vh-8rem)] flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class={container}>
                <ProgressIndicator current=step />
                {move || match step.get() {
                    ReservationStep::ScheduleSelection => view! {
                        <ScheduleSelection flow=flow.read_only() dispatch=dispatch />
                    }.into_any(),
                    ReservationStep::UserDetails => view! {
                        <UserDetailsForm flow=flow.read_only() dispatch=dispatch />
                    }.into_any(),
                    ReservationStep::Payment => view! {
                        <Payment flow=flow.read_only() dispatch=dispatch />
                    }.into_any(),
                    ReservationStep::Confirmation => view! {
                        <Confirmation flow=flow.read_only() dispatch=dispatch />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
