use leptos::*;
use leptos_meta::*;
use crate::components::book_seat::BookSeat;
use crate::components::cancel_booking::CancelBooking;
use crate::components::route_catalog::RouteCatalog;
use crate::config::ApiConfig;
use crate::models::Route;

/// The single screen shown below the header
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    Catalog,
    Booking(Route),
    Cancel,
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_environment());

    let (active_view, set_active_view) = create_signal(ActiveView::Catalog);
    // Re-selecting the current screen must not remount it (and refetch)
    let current_view = create_memo(move |_| active_view.get());

    let show_catalog = Callback::new(move |()| set_active_view.set(ActiveView::Catalog));
    let book_route = Callback::new(move |route: Route| set_active_view.set(ActiveView::Booking(route)));

    view! {
        <Stylesheet id="leptos" href="/bus_reservation.css"/>
        <Title text="BusReservation"/>

        <div class="app">
            <header class="app-header">
                <nav class="app-nav">
                    <div class="brand" on:click=move |_| show_catalog.call(())>
                        "BusReservation"
                    </div>
                    <div class="nav-actions">
                        <button class="nav-button" on:click=move |_| show_catalog.call(())>
                            "Search Routes"
                        </button>
                        <button class="nav-button" on:click=move |_| set_active_view.set(ActiveView::Cancel)>
                            "Cancel Booking"
                        </button>
                    </div>
                </nav>
            </header>

            <main class="app-main">
                {move || match current_view.get() {
                    ActiveView::Catalog => view! {
                        <RouteCatalog on_book_now=book_route />
                    }.into_view(),
                    ActiveView::Booking(route) => view! {
                        <BookSeat route=route on_back=show_catalog />
                    }.into_view(),
                    ActiveView::Cancel => view! {
                        <CancelBooking on_back=show_catalog />
                    }.into_view(),
                }}
            </main>
        </div>
    }
}
