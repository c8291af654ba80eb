use leptos::{component, view, IntoView, create_signal, create_memo, SignalGet, SignalSet, SignalWith, spawn_local, on_cleanup, event_target_value, Callback, Callable, For};
use leptos::logging::error;
use crate::api::ReservationApi;
use crate::components::use_reservation_api;
use crate::flow::catalog::{empty_message, filter_routes, CatalogState};
use crate::flow::Liveness;
use crate::logging::log;
use crate::models::Route;

const SKELETON_CARDS: usize = 3;

/// Searchable list of every route the backend offers
#[component]
#[must_use]
pub fn RouteCatalog(on_book_now: Callback<Route>) -> impl IntoView {
    let (state, set_state) = create_signal(CatalogState::Loading);
    let (search_term, set_search_term) = create_signal(String::new());

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.retire()
    });

    let api = use_reservation_api();
    spawn_local(async move {
        log!("Fetching routes from {}", api.config().base_url());
        let result = api.list_routes().await;
        if let Err(e) = &result {
            error!("Fetch error: {e}");
        }
        if liveness.is_alive() {
            set_state.set(CatalogState::from_result(result));
        }
    });

    let filtered = create_memo(move |_| {
        state.with(|state| match state {
            CatalogState::Loaded(routes) => search_term.with(|term| filter_routes(routes, term)),
            _ => Vec::new(),
        })
    });

    view! {
        <section class="route-catalog">
            <h2 class="catalog-title">"Available Bus Routes"</h2>
            {move || match state.get() {
                CatalogState::Loading => view! {
                    <div class="route-list">
                        {(0..SKELETON_CARDS).map(|_| view! { <RouteCardSkeleton /> }).collect::<Vec<_>>()}
                    </div>
                }.into_view(),
                CatalogState::Failed(err) => view! {
                    <div class="catalog-error">{format!("Error: {err}")}</div>
                }.into_view(),
                CatalogState::Loaded(routes) => {
                    let total = routes.len();
                    view! {
                        <div class="catalog-search">
                            <i class="fa-solid fa-magnifying-glass"></i>
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search by city or bus name (e.g., Chennai, Express 1)..."
                                prop:value=move || search_term.get()
                                on:input=move |ev| set_search_term.set(event_target_value(&ev))
                            />
                        </div>
                        {move || empty_message(total, filtered.with(Vec::len)).map(|message| view! {
                            <p class="catalog-empty">{message}</p>
                        })}
                        <div class="route-list">
                            <For
                                each=move || filtered.get()
                                key=|route| route.id
                                children=move |route: Route| view! {
                                    <RouteCard route=route on_book_now=on_book_now />
                                }
                            />
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

#[component]
fn RouteCard(route: Route, on_book_now: Callback<Route>) -> impl IntoView {
    let schedule = route.schedule_label();
    let price = route.price.map(|price| format!("₹{price:.0}"));
    let seats = format!("{} Seats", route.seat_capacity());
    let route_id = format!("Route ID {}", route.id);
    let bus_name = route.bus_name.clone();
    let origin = route.origin.clone();
    let destination = route.destination.clone();

    view! {
        <article class="route-card">
            <div class="route-details">
                <h3 class="bus-name">
                    <i class="fa-solid fa-bus"></i>
                    {bus_name}
                </h3>
                <p class="route-path">
                    <span>{origin}</span>
                    <i class="fa-solid fa-arrow-right"></i>
                    <span>{destination}</span>
                </p>
                <div class="route-meta">
                    {schedule.map(|schedule| view! {
                        <span class="route-schedule">
                            <i class="fa-regular fa-clock"></i>
                            {schedule}
                        </span>
                    })}
                    <span class="route-capacity">
                        <i class="fa-solid fa-chair"></i>
                        {seats}
                    </span>
                    <span class="route-id">{route_id}</span>
                </div>
            </div>
            <div class="route-actions">
                {price.map(|price| view! { <span class="route-price">{price}</span> })}
                <button
                    class="primary"
                    on:click=move |_| on_book_now.call(route.clone())
                >
                    "Book Now"
                </button>
            </div>
        </article>
    }
}

#[component]
fn RouteCardSkeleton() -> impl IntoView {
    view! {
        <div class="route-card skeleton">
            <div class="route-details">
                <div class="skeleton-bar wide"></div>
                <div class="skeleton-bar"></div>
                <div class="skeleton-bar short"></div>
            </div>
            <div class="route-actions">
                <div class="skeleton-bar short"></div>
                <div class="skeleton-button"></div>
            </div>
        </div>
    }
}
