use leptos::{component, view, IntoView, create_rw_signal, create_memo, RwSignal, SignalGet, SignalUpdate, SignalWith, SignalWithUntracked, spawn_local, on_cleanup, event_target_value, Callback, Callable};
use leptos::logging::error;
use crate::api::ReservationApi;
use crate::components::seat_grid::{SeatGrid, SeatLegend};
use crate::components::use_reservation_api;
use crate::flow::booking::BookingFlow;
use crate::flow::Liveness;
use crate::logging::log;
use crate::models::{Route, TravelTime};

/// Seat selection and booking for one route
#[component]
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn BookSeat(route: Route, on_back: Callback<()>) -> impl IntoView {
    let capacity = route.seat_capacity();
    let heading = route.summary();
    let route_label = route.capacity_label();

    let flow = create_rw_signal(BookingFlow::new(route));
    let api = use_reservation_api();

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.retire()
    });

    let load_seats = {
        let api = api.clone();
        let liveness = liveness.clone();
        Callback::new(move |travel_time: TravelTime| {
            let Some(Some(ticket)) = flow.try_update(|f| f.select_time(travel_time)) else {
                return;
            };

            let api = api.clone();
            let liveness = liveness.clone();
            log!("Fetching occupancy for route {} at {}", ticket.route_id, ticket.travel_time);
            spawn_local(async move {
                let result = api.occupied_seats(ticket.route_id, ticket.travel_time).await;
                if let Err(e) = &result {
                    error!("Seat data error: {e}");
                }
                flow.try_update(|f| {
                    liveness.deliver(f, result, |f, result| {
                        if !f.apply_occupancy(ticket, result) {
                            log!("Discarded stale occupancy for {}", ticket.travel_time);
                        }
                    })
                });
            });
        })
    };

    let submit = Callback::new(move |()| {
        let Some(Ok(request)) = flow.try_update(BookingFlow::begin_submit) else {
            return;
        };

        let api = api.clone();
        let liveness = liveness.clone();
        log!("Submitting booking for seat {} at {}", request.seat_number, request.travel_time);
        spawn_local(async move {
            let result = api.create_booking(&request).await;
            if let Err(e) = &result {
                error!("Booking error: {e}");
            }
            flow.try_update(|f| liveness.deliver(f, result, BookingFlow::finish_submit));
        });
    });

    load_seats.call(flow.with_untracked(BookingFlow::travel_time));

    let is_booked = create_memo(move |_| flow.with(BookingFlow::is_booked));

    view! {
        {move || if is_booked.get() {
            view! { <BookingConfirmation flow=flow on_back=on_back /> }.into_view()
        } else {
            view! {
                <div class="book-seat">
                    <button class="back-button primary" on:click=move |_| on_back.call(())>
                        <i class="fa-solid fa-chevron-left"></i>
                        " Back to Routes"
                    </button>

                    <div class="book-seat-layout">
                        <BookingForm
                            flow=flow
                            heading=heading.clone()
                            route_label=route_label.clone()
                            on_time_change=load_seats
                            on_submit=submit
                        />
                        <SeatPanel flow=flow capacity=capacity />
                    </div>
                </div>
            }.into_view()
        }}
    }
}

#[component]
fn BookingForm(
    flow: RwSignal<BookingFlow>,
    heading: String,
    route_label: String,
    on_time_change: Callback<TravelTime>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_submitting = move || flow.with(BookingFlow::is_submitting);

    view! {
        <div class="booking-form-panel">
            <h2 class="booking-title">
                "Book Seat for"
                <span class="booking-route">{heading}</span>
            </h2>

            <form
                class="booking-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <label>
                    "Route"
                    <input type="text" disabled=true value=route_label />
                </label>

                <label>
                    "Your Name"
                    <input
                        type="text"
                        required=true
                        prop:value=move || flow.with(|f| f.customer_name().to_string())
                        on:input=move |ev| flow.update(|f| f.set_customer_name(event_target_value(&ev)))
                    />
                </label>

                <label>
                    "Departure Time"
                    <select
                        prop:disabled=is_submitting
                        on:change=move |ev| {
                            match TravelTime::parse(&event_target_value(&ev)) {
                                Ok(travel_time) => on_time_change.call(travel_time),
                                Err(e) => error!("{e}"),
                            }
                        }
                    >
                        {TravelTime::slots().into_iter().map(|slot| {
                            let label = slot.to_string();
                            view! {
                                <option
                                    value=label.clone()
                                    prop:selected=move || flow.with(|f| f.travel_time() == slot)
                                >
                                    {label}
                                </option>
                            }
                        }).collect::<Vec<_>>()}
                    </select>
                </label>

                <label>
                    "Selected Seat"
                    <input
                        type="text"
                        disabled=true
                        prop:value=move || flow.with(|f| {
                            f.selected_seat()
                                .map_or_else(|| "None (Please select a seat)".to_string(), |seat| seat.to_string())
                        })
                    />
                </label>

                <button
                    type="submit"
                    class="primary submit-button"
                    disabled=move || !flow.with(BookingFlow::can_submit)
                >
                    {move || if is_submitting() { "Booking..." } else { "Book Now" }}
                </button>

                {move || flow.with(|f| f.booking_error().map(str::to_string)).map(|err| view! {
                    <div class="booking-error">{format!("Booking Failed: {err}")}</div>
                })}
            </form>
        </div>
    }
}

#[component]
fn SeatPanel(flow: RwSignal<BookingFlow>, capacity: u32) -> impl IntoView {
    let seat_error = create_memo(move |_| flow.with(|f| f.seat_error().map(str::to_string)));
    let loading_seats = create_memo(move |_| flow.with(BookingFlow::is_loading_seats));

    let seat_status = move |seat: u32| flow.with(|f| f.seat_status(seat));
    let select_seat = Callback::new(move |seat: u32| {
        flow.update(|f| {
            f.select_seat(seat);
        });
    });

    view! {
        {move || match seat_error.get() {
            Some(err) => view! {
                <div class="seat-panel seat-error">
                    <p class="seat-error-message">{format!("Error: {err}")}</p>
                    <p class="seat-error-hint">"Try again or ensure backend is running."</p>
                </div>
            }.into_view(),
            None => view! {
                <div class="seat-panel">
                    <h3>"Select Your Seat"</h3>
                    <SeatLegend />
                    {move || if loading_seats.get() {
                        view! { <p class="seat-loading">"Loading seats..."</p> }.into_view()
                    } else {
                        view! {
                            <SeatGrid capacity=capacity seat_status=seat_status on_select=select_seat />
                        }.into_view()
                    }}
                </div>
            }.into_view(),
        }}
    }
}

#[component]
fn BookingConfirmation(flow: RwSignal<BookingFlow>, on_back: Callback<()>) -> impl IntoView {
    let (message, summary, seat, travel_time) = flow.with_untracked(|f| {
        (
            f.confirmation().unwrap_or_default().to_string(),
            f.route().summary(),
            f.selected_seat().map(|seat| seat.to_string()).unwrap_or_default(),
            f.travel_time(),
        )
    });

    view! {
        <div class="confirmation">
            <h2 class="confirmation-title">"Booking Confirmed!"</h2>
            <p class="confirmation-message">{message}</p>
            <p class="confirmation-details">
                {summary}
                <br />
                "Seat: "
                <span class="confirmation-seat">{seat}</span>
                {format!(" at {travel_time}")}
            </p>
            <button class="primary" on:click=move |_| on_back.call(())>
                "Back to Routes"
            </button>
        </div>
    }
}
