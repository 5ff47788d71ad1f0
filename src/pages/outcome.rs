use std::time::Duration;

use leptos::prelude::*;

use crate::components::fade::use_fade_in;
use crate::components::header::{CONTACT_PHONE, SUPPORT_EMAIL};

/// Landing page after the payment provider reports success.
#[component]
pub fn SuccessPage() -> impl IntoView {
    let fade = use_fade_in(Duration::from_millis(100));

    view! {
        <div class="min-h-[calc(100vh-5rem)] flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class={move || format!("max-w-2xl w-full bg-white rounded-2xl shadow-2xl border-2 border-slate-100 {}", fade.get())}>
                <div class="p-6 pb-6 text-center">
                    <div class="mx-auto w-24 h-24 bg-gradient-to-br from-green-500 to-emerald-600 rounded-full flex items-center justify-center mb-6 shadow-lg shadow-green-500/30 animate-bounce">
                        <i class="fas fa-circle-check text-5xl text-white"></i>
                    </div>
                    <h2 class="text-3xl font-semibold mb-2">"Pembayaran Berhasil!"</h2>
                    <p class="text-base text-slate-500">
                        "Terima kasih atas pembayaran Anda. Reservasi badminton Anda telah dikonfirmasi."
                    </p>
                </div>

                <div class="px-6 pb-6 space-y-6">
                    <div class="bg-gradient-to-br from-green-50 to-emerald-50 rounded-xl p-6 space-y-4">
                        <div class="flex items-center justify-center gap-2 text-green-700 font-semibold">
                            <i class="fas fa-circle-check"></i>
                            <span>"Reservasi Anda Telah Terkonfirmasi"</span>
                        </div>
                        <hr class="border-green-200" />
                        <p class="text-center text-sm text-slate-700">
                            "Email konfirmasi telah dikirim ke alamat email Anda. Silakan cek inbox atau folder spam Anda."
                        </p>
                    </div>

                    <a href="/" class="flex items-center justify-center w-full h-12 rounded-md border border-slate-300 bg-white hover:bg-slate-50 font-medium">
                        <i class="fas fa-house mr-2"></i>
                        "Kembali ke Beranda"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Landing page after the payment provider reports failure.
#[component]
pub fn FailedPage() -> impl IntoView {
    let fade = use_fade_in(Duration::from_millis(100));

    view! {
        <div class="min-h-[calc(100vh-5rem)] flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class={move || format!("max-w-2xl w-full bg-white rounded-2xl shadow-2xl border-2 border-red-100 {}", fade.get())}>
                <div class="p-6 pb-6 text-center">
                    <div class="mx-auto w-24 h-24 bg-gradient-to-br from-red-500 to-rose-600 rounded-full flex items-center justify-center mb-6 shadow-lg shadow-red-500/30">
                        <i class="fas fa-circle-xmark text-5xl text-white"></i>
                    </div>
                    <h2 class="text-3xl font-semibold text-red-600 mb-2">"Pembayaran Gagal"</h2>
                    <p class="text-base text-slate-500">"Maaf, pembayaran Anda tidak dapat diproses."</p>
                </div>

                <div class="px-6 pb-6 space-y-6">
                    <div class="flex items-start gap-3 p-4 rounded-lg border border-red-200 bg-red-50 text-red-700" role="alert">
                        <i class="fas fa-circle-xmark mt-1"></i>
                        <span>
                            "Transaksi pembayaran Anda tidak berhasil. Silakan coba lagi atau gunakan metode pembayaran lain."
                        </span>
                    </div>

                    <div class="bg-slate-50 rounded-xl p-6 space-y-3">
                        <h3 class="font-semibold text-slate-900">"Butuh Bantuan?"</h3>
                        <div class="space-y-2 text-sm text-slate-700">
                            <div class="flex items-center gap-2">
                                <i class="fas fa-phone text-blue-600"></i>
                                <span>{format!("Hubungi: {CONTACT_PHONE}")}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <i class="fas fa-envelope text-purple-600"></i>
                                <span>{format!("Email: {SUPPORT_EMAIL}")}</span>
                            </div>
                        </div>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-3">
                        <a href="/" class="flex-1 flex items-center justify-center h-12 rounded-md border border-slate-300 bg-white hover:bg-slate-50 font-medium">
                            <i class="fas fa-house mr-2"></i>
                            "Kembali ke Beranda"
                        </a>
                        <a href="/" class="flex-1 flex items-center justify-center h-12 rounded-md text-white font-medium bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700">
                            <i class="fas fa-rotate-right mr-2"></i>
                            "Coba Lagi"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
