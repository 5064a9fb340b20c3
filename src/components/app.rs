// ============================================================================
// APP - Raíz de la aplicación: router, toasts y sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::ToastProvider;
use crate::components::{
    ApartmentDetail, ApartmentList, BookingConfirm, ErrorPage, Header, Login, MyBookings, Profile,
};
use crate::hooks::SessionProvider;
use crate::routes::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <ApartmentList /> },
        Route::Login => html! { <Login /> },
        Route::ApartmentDetail { id } => html! { <ApartmentDetail {id} /> },
        Route::BookingConfirm { id } => html! { <BookingConfirm {id} /> },
        Route::MyBookings => html! { <MyBookings /> },
        Route::Profile => html! { <Profile /> },
        Route::ErrorPage => html! { <ErrorPage /> },
        Route::NotFound => html! {
            <div class="empty-state">
                <h1>{ "404" }</h1>
                <p>{ "Esta página no existe" }</p>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <SessionProvider>
                    <Header />
                    <main class="page">
                        <Switch<Route> render={switch} />
                    </main>
                </SessionProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}
