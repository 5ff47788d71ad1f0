use leptos::prelude::*;

use crate::data::flow::ReservationStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

pub fn step_state(step: ReservationStep, current: ReservationStep) -> StepState {
    match step.index().cmp(&current.index()) {
        std::cmp::Ordering::Less => StepState::Completed,
        std::cmp::Ordering::Equal => StepState::Current,
        std::cmp::Ordering::Greater => StepState::Upcoming,
    }
}

/// Width of the progress line in percent.
pub fn progress_percent(current: ReservationStep) -> f64 {
    let last = (ReservationStep::ALL.len() - 1) as f64;
    current.index() as f64 / last * 100.0
}

fn step_icon(step: ReservationStep) -> &'static str {
    match step {
        ReservationStep::ScheduleSelection => "fas fa-calendar-days",
        ReservationStep::UserDetails => "fas fa-user",
        ReservationStep::Payment => "fas fa-credit-card",
        ReservationStep::Confirmation => "fas fa-circle-check",
    }
}

#[component]
pub fn ProgressIndicator(#[prop(into)] current: Signal<ReservationStep>) -> impl IntoView {
    view! {
        <div class="w-full max-w-3xl mx-auto mb-10">
            <div class="relative">
                <div class="absolute top-6 left-0 right-0 h-1 bg-slate-200 rounded-full" style="z-index: 0;">
                    <div
                        class="h-full bg-gradient-to-r from-blue-500 to-purple-600 rounded-full transition-all duration-500 ease-out"
                        style={move || format!("width: {}%;", progress_percent(current.get()))}
                    ></div>
                </div>

                <div class="relative flex items-center justify-between" style="z-index: 1;">
                    {ReservationStep::ALL.into_iter().map(|step| {
                        let state = move || step_state(step, current.get());
                        view! {
                            <div class="flex flex-col items-center">
                                <div class={move || {
                                    let base = "w-14 h-14 rounded-full flex items-center justify-center transition-all duration-500 shadow-lg relative";
                                    match state() {
                                        StepState::Completed => format!("{base} bg-gradient-to-br from-green-500 to-emerald-600 text-white ring-4 ring-green-100"),
                                        StepState::Current => format!("{base} bg-gradient-to-br from-blue-600 to-purple-600 text-white ring-4 ring-blue-100 scale-110"),
                                        StepState::Upcoming => format!("{base} bg-white text-slate-400 border-2 border-slate-200"),
                                    }
                                }}>
                                    <i class={move || {
                                        let size = if state() == StepState::Current { "text-xl" } else { "text-lg" };
                                        format!("{} {size}", step_icon(step))
                                    }}></i>
                                    <Show when=move || state() == StepState::Completed>
                                        <div class="absolute -top-1 -right-1 w-5 h-5 bg-white rounded-full flex items-center justify-center">
                                            <i class="fas fa-circle-check text-green-500 text-sm"></i>
                                        </div>
                                    </Show>
                                </div>
                                <span class={move || {
                                    let color = if state() == StepState::Upcoming { "text-slate-400" } else { "text-slate-900" };
                                    format!("mt-3 text-xs font-semibold transition-all duration-300 text-center max-w-[80px] {color}")
                                }}>
                                    {step.label()}
                                </span>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
