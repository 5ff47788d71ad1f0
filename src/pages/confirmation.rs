use leptos::prelude::*;

use crate::data::flow::{FlowAction, ReservationFlow};
use crate::pages::summary::SelectionSummary;

#[component]
pub fn Confirmation(
    flow: ReadSignal<ReservationFlow>,
    dispatch: Callback<FlowAction>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-2xl border-2 border-slate-100">
            <div class="p-6 pb-4 text-center">
                <div class="mx-auto w-20 h-20 bg-gradient-to-br from-green-500 to-emerald-600 rounded-full flex items-center justify-center mb-4 shadow-lg shadow-green-500/30">
                    <i class="fas fa-circle-check text-4xl text-white"></i>
                </div>
                <h2 class="text-3xl font-semibold">"Reservasi Berhasil!"</h2>
                <p class="text-base text-slate-500 mt-2">"Terima kasih telah membuat reservasi di DIRO"</p>
            </div>

            <div class="px-6 pb-6 space-y-6">
                <SelectionSummary flow=flow />

                <div class="pt-4">
                    <button
                        class="w-full h-12 rounded-md border border-slate-300 bg-white hover:bg-slate-50 font-medium"
                        on:click=move |_| dispatch.run(FlowAction::Restart)
                    >
                        <i class="fas fa-arrow-left mr-2"></i>
                        "Buat Reservasi Lagi"
                    </button>
                </div>
            </div>
        </div>
    }
}
