use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white/90 backdrop-blur-lg border-t border-slate-200/60 mt-auto shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                    <div class="flex items-center space-x-3">
                        <div class="w-10 h-10 bg-gradient-to-br from-blue-600 via-blue-500 to-purple-600 rounded-xl flex items-center justify-center shadow-lg shadow-blue-500/30">
                            <i class="fas fa-shuttlecock text-white"></i>
                        </div>
                        <div class="text-center md:text-left">
                            <p class="text-sm font-semibold text-slate-900">"© 2025 DIRO Badminton"</p>
                            <p class="text-xs text-slate-600">"All rights reserved."</p>
                        </div>
                    </div>
                    <div class="flex flex-wrap items-center justify-center gap-6 text-sm text-slate-600">
                        <a href="#" class="hover:text-blue-600 transition-colors font-medium hover:underline">"Privacy Policy"</a>
                        <a href="#" class="hover:text-blue-600 transition-colors font-medium hover:underline">"Terms of Service"</a>
                        <a href="#" class="hover:text-blue-600 transition-colors font-medium hover:underline">"Contact Us"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
