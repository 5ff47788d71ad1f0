use leptos::prelude::*;

use crate::data::flow::{FlowAction, ReservationFlow, COURT_PRICE_IDR};
use crate::pages::summary::SelectionSummary;
use crate::utils::currency::format_idr;

#[component]
pub fn Payment(flow: ReadSignal<ReservationFlow>, dispatch: Callback<FlowAction>) -> impl IntoView {
    let submitting = Memo::new(move |_| flow.with(|state| state.submitting));

    view! {
        <div class="bg-white rounded-2xl shadow-2xl border-2 border-slate-100">
            <div class="p-6 space-y-2">
                <h2 class="text-2xl font-semibold flex items-center gap-2">
                    <i class="fas fa-credit-card text-blue-600"></i>
                    "Pembayaran"
                </h2>
                <p class="text-base text-slate-500">"Selesaikan pembayaran untuk mengonfirmasi reservasi Anda"</p>
            </div>

            <div class="px-6 pb-6 space-y-6">
                <h3 class="font-semibold text-slate-900">"Detail Reservasi"</h3>
                <SelectionSummary flow=flow />

                <div class="flex justify-between items-center px-2">
                    <span class="text-lg font-bold text-slate-900">"Total Pembayaran"</span>
                    <span class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {format_idr(COURT_PRICE_IDR)}
                    </span>
                </div>

                <div class="flex items-center gap-3 p-4 rounded-lg border border-blue-200 bg-blue-50 text-blue-800">
                    <i class="fas fa-circle-info text-blue-600"></i>
                    <span>"Anda akan diarahkan ke halaman pembayaran untuk menyelesaikan transaksi"</span>
                </div>

                <div class="flex flex-col gap-3 pt-2">
                    <button
                        class="w-full h-12 rounded-md text-white text-base font-semibold bg-gradient-to-r from-green-600 to-emerald-600 hover:from-green-700 hover:to-emerald-700 shadow-lg shadow-green-500/30 disabled:opacity-60"
                        disabled={move || submitting.get()}
                        on:click=move |_| dispatch.run(FlowAction::SubmitPayment)
                    >
                        {move || if submitting.get() {
                            view! {
                                <span><i class="fas fa-spinner fa-spin mr-2"></i>"Memproses..."</span>
                            }.into_any()
                        } else {
                            view! {
                                <span><i class="fas fa-credit-card mr-2"></i>"Bayar Sekarang"</span>
                            }.into_any()
                        }}
                    </button>
                    <button
                        class="w-full h-12 rounded-md hover:bg-slate-50 font-medium disabled:opacity-50"
                        disabled={move || submitting.get()}
                        on:click=move |_| dispatch.run(FlowAction::Back)
                    >
                        <i class="fas fa-arrow-left mr-2"></i>
                        "Kembali"
                    </button>
                </div>
            </div>
        </div>
    }
}
