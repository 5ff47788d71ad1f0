use leptos::prelude::*;

use crate::data::flow::{AvailabilityState, FlowAction, ReservationFlow};
use crate::pages::court_card::CourtCard;
use crate::utils::date::{format_iso_date, today_iso};

#[component]
pub fn ScheduleSelection(
    flow: ReadSignal<ReservationFlow>,
    dispatch: Callback<FlowAction>,
) -> impl IntoView {
    let date_value = Memo::new(move |_| {
        flow.with(|state| state.date.map(format_iso_date).unwrap_or_default())
    });
    let availability = Memo::new(move |_| flow.with(|state| state.availability.clone()));

    view! {
        <div class="bg-white rounded-2xl shadow-2xl border-2 border-slate-100">
            <div class="p-6 space-y-2">
                <h2 class="text-2xl font-semibold flex items-center gap-3">
                    <div class="w-10 h-10 bg-gradient-to-br from-blue-600 to-purple-600 rounded-xl flex items-center justify-center">
                        <i class="fas fa-calendar-days text-white"></i>
                    </div>
                    "Reservasi Lapangan Badminton"
                </h2>
                <p class="text-base text-slate-500">"Pilih tanggal dan waktu yang Anda inginkan"</p>
            </div>

            <div class="px-6 pb-6 space-y-6">
                <div class="space-y-2">
                    <label for="date-select" class="text-base font-semibold flex items-center gap-2">
                        <i class="fas fa-calendar-days"></i>
                        "Pilih Tanggal"
                    </label>
                    <input
                        id="date-select"
                        type="date"
                        class="w-full h-12 px-3 text-base border border-slate-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        min=today_iso()
                        prop:value={move || date_value.get()}
                        on:input=move |ev| dispatch.run(FlowAction::SelectDate(event_target_value(&ev)))
                    />
                </div>

                {move || match availability.get() {
                    AvailabilityState::Idle => view! {
                        <div class="text-center py-16 bg-gradient-to-br from-blue-50 to-purple-50 rounded-xl">
                            <i class="fas fa-calendar-days text-6xl text-slate-300 mb-4"></i>
                            <p class="text-slate-500 font-medium">"Pilih tanggal untuk melihat ketersediaan lapangan"</p>
                        </div>
                    }.into_any(),
                    AvailabilityState::Loading(_) => view! { <LoadingCourts /> }.into_any(),
                    AvailabilityState::Failed(message) => view! {
                        <div class="flex items-center gap-3 p-4 rounded-lg border border-red-200 bg-red-50 text-red-700" role="alert">
                            <i class="fas fa-circle-exclamation"></i>
                            <span>{message}</span>
                        </div>
                    }.into_any(),
                    AvailabilityState::Loaded(snapshot) => {
                        let court_count = snapshot.courts.len();
                        view! {
                            <div class="space-y-6">
                                <div class="flex items-center justify-between">
                                    <h3 class="text-xl font-bold text-slate-900 flex items-center gap-2">
                                        <i class="fas fa-location-dot text-blue-600"></i>
                                        "Lapangan Tersedia"
                                    </h3>
                                    <span class="text-sm px-3 py-1 rounded-full bg-slate-100 text-slate-700">
                                        {format!("{} Lapangan", court_count)}
                                    </span>
                                </div>

                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {snapshot.courts.into_iter().map(|court| {
                                        view! { <CourtCard availability=court dispatch=dispatch /> }
                                    }).collect::<Vec<_>>()}
                                </div>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn LoadingCourts() -> impl IntoView {
    view! {
        <div class="space-y-4 py-8">
            <div class="flex items-center justify-center gap-3">
                <i class="fas fa-spinner fa-spin text-3xl text-blue-600"></i>
                <p class="text-lg font-medium text-slate-700">"Memuat ketersediaan lapangan..."</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {(0..3).map(|_| view! {
                    <div class="p-6 rounded-xl border border-slate-200 animate-pulse">
                        <div class="h-6 w-3/4 mb-4 bg-slate-200 rounded"></div>
                        <div class="h-4 w-full mb-6 bg-slate-200 rounded"></div>
                        <div class="space-y-2">
                            <div class="h-10 w-full bg-slate-200 rounded"></div>
                            <div class="h-10 w-full bg-slate-200 rounded"></div>
                            <div class="h-10 w-full bg-slate-200 rounded"></div>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
