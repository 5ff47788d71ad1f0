use leptos::prelude::*;

use crate::data::flow::{FlowAction, SlotSelection};
use crate::data::shared_booking::CourtAvailability;

#[component]
pub fn CourtCard(
    availability: CourtAvailability,
    dispatch: Callback<FlowAction>,
) -> impl IntoView {
    let open_count = availability.open_slot_count();
    let court = availability.court.clone();

    let slots = availability
        .open_slots()
        .map(|slot| {
            let selection = SlotSelection::new(&court, slot);
            let label = format!("{} - {}", slot.start_time, slot.end_time);

            view! {
                <button
                    class="w-full px-4 py-3 text-sm bg-gradient-to-r from-blue-50 to-purple-50 hover:from-blue-100 hover:to-purple-100 text-slate-800 font-medium rounded-lg border-2 border-blue-100 hover:border-blue-300 transition-all hover:shadow-md flex items-center justify-between group/button"
                    on:click=move |_| dispatch.run(FlowAction::SelectSlot(selection.clone()))
                >
                    <span class="flex items-center gap-2">
                        <i class="far fa-clock text-blue-600"></i>
                        {label}
                    </span>
                    <i class="fas fa-arrow-right text-blue-600 opacity-0 group-hover/button:opacity-100 transition-opacity"></i>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="rounded-xl bg-white hover:shadow-xl transition-all duration-300 border-2 border-slate-100 hover:border-blue-200 overflow-hidden group">
            <div class="p-6 space-y-4">
                <div class="flex items-start justify-between">
                    <div>
                        <h4 class="font-bold text-lg text-slate-900 group-hover:text-blue-600 transition-colors">{court.name.clone()}</h4>
                        <p class="text-sm text-slate-600 mt-1">{court.description.clone()}</p>
                    </div>
                    <span class="text-xs px-2 py-1 rounded-md border bg-blue-50 border-blue-200 text-blue-700 whitespace-nowrap">
                        {format!("{} slot", open_count)}
                    </span>
                </div>

                <hr class="border-slate-200" />

                <div class="space-y-2">
                    <p class="text-xs font-semibold text-slate-600 uppercase tracking-wide flex items-center gap-1">
                        <i class="far fa-clock"></i>
                        "Waktu Tersedia"
                    </p>
                    <div class="space-y-2 max-h-64 overflow-y-auto pr-2">
                        {if slots.is_empty() {
                            view! { <p class="text-sm text-slate-400">"Tidak ada slot tersedia"</p> }.into_any()
                        } else {
                            slots.into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
