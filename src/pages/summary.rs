use leptos::prelude::*;

use crate::data::flow::ReservationFlow;
use crate::utils::date::format_display_date;

#[derive(Debug, Clone, PartialEq)]
struct SummaryLine {
    date: String,
    time: String,
    court: String,
}

fn summary_line(flow: &ReservationFlow) -> SummaryLine {
    let selection = flow.selection.as_ref();
    SummaryLine {
        date: flow.date.map(format_display_date).unwrap_or_default(),
        time: selection.map(|s| s.timeslot_start.clone()).unwrap_or_default(),
        court: selection.map(|s| s.court_name.clone()).unwrap_or_default(),
    }
}

/// Date, time and court of the current selection.
#[component]
pub fn SelectionSummary(flow: ReadSignal<ReservationFlow>) -> impl IntoView {
    let line = Memo::new(move |_| flow.with(summary_line));

    let row = move |icon: &'static str, label: &'static str, value: Signal<String>| {
        view! {
            <div class="flex items-start gap-3">
                <i class={format!("{icon} mt-1")}></i>
                <div>
                    <p class="text-sm text-slate-600 font-medium">{label}</p>
                    <p class="text-lg font-bold text-slate-900">{move || value.get()}</p>
                </div>
            </div>
        }
    };

    view! {
        <div class="bg-gradient-to-br from-blue-50 to-purple-50 rounded-xl p-6 space-y-4">
            {row("fas fa-calendar-days text-blue-600", "Tanggal", Signal::derive(move || line.get().date))}
            <hr class="border-slate-200" />
            {row("far fa-clock text-purple-600", "Waktu", Signal::derive(move || line.get().time))}
            <hr class="border-slate-200" />
            {row("fas fa-location-dot text-green-600", "Lapangan", Signal::derive(move || line.get().court))}
        </div>
    }
}
