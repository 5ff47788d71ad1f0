use leptos::prelude::*;

use crate::data::flow::{DetailsField, FlowAction, ReservationFlow};
use crate::utils::date::format_display_date;

#[component]
fn DetailsInput(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    field: DetailsField,
    flow: ReadSignal<ReservationFlow>,
    dispatch: Callback<FlowAction>,
) -> impl IntoView {
    let value = move || {
        flow.with(|state| match field {
            DetailsField::Name => state.details.name.clone(),
            DetailsField::Email => state.details.email.clone(),
            DetailsField::Phone => state.details.phone.clone(),
        })
    };

    view! {
        <div class="space-y-2">
            <label for={id} class="text-base font-semibold flex items-center gap-2">
                <i class={icon}></i>
                {label}
            </label>
            <input
                id={id}
                type={input_type}
                class="w-full h-12 px-3 text-base border border-slate-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder={placeholder}
                prop:value={value}
                on:input=move |ev| dispatch.run(FlowAction::EditDetails(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn UserDetailsForm(
    flow: ReadSignal<ReservationFlow>,
    dispatch: Callback<FlowAction>,
) -> impl IntoView {
    let court = move || {
        flow.with(|state| {
            state
                .selection
                .as_ref()
                .map(|s| s.court_name.clone())
                .unwrap_or_default()
        })
    };
    let when = move || {
        flow.with(|state| {
            let start = state
                .selection
                .as_ref()
                .map(|s| s.timeslot_start.clone())
                .unwrap_or_default();
            let date = state.date.map(format_display_date).unwrap_or_default();
            format!("{start} pada {date}")
        })
    };
    let incomplete = move || flow.with(|state| !state.details.is_complete());

    view! {
        <div class="bg-white rounded-2xl shadow-2xl border-2 border-slate-100">
            <div class="p-6 space-y-2">
                <h2 class="text-2xl font-semibold flex items-center gap-2">
                    <i class="fas fa-user text-blue-600"></i>
                    "Informasi Anda"
                </h2>
                <p class="text-base text-slate-500">"Mohon lengkapi informasi Anda untuk menyelesaikan reservasi"</p>
            </div>

            <div class="px-6 pb-6 space-y-6">
                <div class="flex gap-3 p-4 rounded-lg border border-blue-200 bg-gradient-to-br from-blue-50 to-purple-50 text-slate-700">
                    <i class="fas fa-circle-check text-blue-600 mt-1"></i>
                    <div class="space-y-1">
                        <p class="font-semibold text-slate-900">"Detail Reservasi Anda:"</p>
                        <div class="flex items-center gap-2 text-sm">
                            <i class="fas fa-location-dot text-purple-600"></i>
                            <span>{court}</span>
                        </div>
                        <div class="flex items-center gap-2 text-sm">
                            <i class="far fa-clock text-blue-600"></i>
                            <span>{when}</span>
                        </div>
                    </div>
                </div>

                <div class="space-y-4">
                    <DetailsInput
                        id="full-name"
                        label="Nama Lengkap"
                        icon="fas fa-user"
                        input_type="text"
                        placeholder="Masukkan nama lengkap Anda"
                        field=DetailsField::Name
                        flow=flow
                        dispatch=dispatch
                    />
                    <DetailsInput
                        id="email"
                        label="Alamat Email"
                        icon="fas fa-envelope"
                        input_type="email"
                        placeholder="contoh@email.com"
                        field=DetailsField::Email
                        flow=flow
                        dispatch=dispatch
                    />
                    <DetailsInput
                        id="phone"
                        label="Nomor Telepon"
                        icon="fas fa-phone"
                        input_type="tel"
                        placeholder="+62 812 3456 7890"
                        field=DetailsField::Phone
                        flow=flow
                        dispatch=dispatch
                    />
                </div>

                <div class="flex flex-col sm:flex-row gap-3 pt-4">
                    <button
                        class="flex-1 h-12 rounded-md border border-slate-300 bg-white hover:bg-slate-50 font-medium"
                        on:click=move |_| dispatch.run(FlowAction::Back)
                    >
                        <i class="fas fa-arrow-left mr-2"></i>
                        "Kembali"
                    </button>
                    <button
                        class="flex-1 h-12 rounded-md text-white font-medium bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={incomplete}
                        on:click=move |_| dispatch.run(FlowAction::SubmitDetails)
                    >
                        "Lanjut ke Pembayaran"
                        <i class="fas fa-arrow-right ml-2"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}
