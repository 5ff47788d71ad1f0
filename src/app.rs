use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{FlatRoutes, Route, Router},
    StaticSegment,
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::{provide_toaster, Toaster};
use crate::pages::home::HomePage;
use crate::pages::outcome::{FailedPage, SuccessPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Stylesheet id="leptos" href="/pkg/diro-reservation.css"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico"/>
                <Link rel="preconnect" href="https://fonts.googleapis.com"/>
                <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
                <Link href="https://fonts.googleapis.com/css2?family=Outfit:wght@400;500;600;700&display=swap" rel="stylesheet"/>
                <Link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"/>
                <MetaTags/>
            </head>
            <body class="antialiased bg-gradient-to-br from-slate-50 via-blue-50 to-indigo-50 min-h-screen flex flex-col">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        <Title text="DIRO - Badminton Reservation App"/>
        <Meta name="description" content="Simple Badminton Reservation App for DIRO"/>
        <Header/>
        <main class="flex-1">
            <Router>
                <FlatRoutes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("success") view=SuccessPage/>
                    <Route path=StaticSegment("failed") view=FailedPage/>
                </FlatRoutes>
            </Router>
        </main>
        <Footer/>
        <Toaster/>
    }
}
