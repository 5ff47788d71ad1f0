use leptos::prelude::*;

pub const CONTACT_PHONE: &str = "+62 123 456 7890";
pub const SUPPORT_EMAIL: &str = "support@diro.com";
pub const OPENING_HOURS: &str = "Open Daily 6AM - 11PM";
pub const CITY: &str = "Jakarta";

#[component]
pub fn Header(
    #[prop(into, default = "DIRO".to_string())] title: String,
    #[prop(into, default = "Badminton Reservation System".to_string())] subtitle: String,
) -> impl IntoView {
    view! {
        <header class="w-full bg-white/90 backdrop-blur-lg border-b border-slate-200/60 sticky top-0 z-50 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <a href="/" class="flex items-center space-x-3">
                        <div class="w-12 h-12 bg-gradient-to-br from-blue-600 via-blue-500 to-purple-600 rounded-2xl flex items-center justify-center shadow-lg shadow-blue-500/30 ring-2 ring-blue-100">
                            <i class="fas fa-shuttlecock text-white text-xl"></i>
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">{title}</h1>
                            <p class="text-sm text-slate-600 font-medium">{subtitle}</p>
                        </div>
                    </a>
                    <div class="flex items-center space-x-4">
                        <span class="hidden lg:flex items-center gap-2 px-3 py-1.5 rounded-full bg-slate-100 text-xs font-medium text-slate-700">
                            <i class="far fa-clock"></i>
                            {OPENING_HOURS}
                        </span>
                        <div class="hidden md:flex items-center space-x-2 text-sm text-slate-700 bg-slate-50 px-3 py-2 rounded-lg">
                            <i class="fas fa-phone text-blue-600"></i>
                            <span class="font-medium">{CONTACT_PHONE}</span>
                        </div>
                        <div class="hidden sm:flex items-center space-x-2 text-sm text-slate-700 bg-slate-50 px-3 py-2 rounded-lg">
                            <i class="fas fa-location-dot text-purple-600"></i>
                            <span class="font-medium">{CITY}</span>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}
